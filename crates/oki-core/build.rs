fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/tables/default_kana.toml",
        include_str!("src/tables/default_kana.toml"),
    );
    validate_toml(
        "src/tables/default_phonetics.toml",
        include_str!("src/tables/default_phonetics.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
