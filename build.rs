fn main() {
    // fl!() checks message ids against the fallback translations at compile time,
    // askama compiles the templates in, and release builds embed the rest
    let watched = ["i18n", "i18n.toml", "res/web", "templates"];

    for path in watched {
        println!("cargo:rerun-if-changed={path}");
    }
}
