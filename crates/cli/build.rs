use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("redactor")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Redactor Contributors")
        .about("Score SEO content quality of an HTML document")
        .arg(clap::arg!([INPUT] "Local HTML file, or '-' for stdin"))
        .arg(clap::arg!(--title <TEXT> "SEO title of the document"))
        .arg(clap::arg!(--description <TEXT> "Meta description of the document"))
        .arg(clap::arg!(-k --keyword <KEYWORD> "Focus keyword (default: top recommended keyword)"))
        .arg(clap::arg!(--noindex "The document carries a noindex robots directive"))
        .arg(clap::arg!(--nofollow "The document carries a nofollow robots directive"))
        .arg(
            clap::arg!(-c --config <FILE> "Configuration file, TOML or JSON (default: user config directory)")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (text, json)")
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(-v --verbose "Enable debug logging"))
        .arg(
            clap::arg!(--completions <SHELL> "Generate shell completion script")
                .value_parser(["bash", "zsh", "fish", "powershell", "elvish"]),
        );

    for shell in [
        clap_complete::shells::Shell::Bash,
        clap_complete::shells::Shell::Zsh,
        clap_complete::shells::Shell::Fish,
        clap_complete::shells::Shell::PowerShell,
    ] {
        clap_complete::generate_to(shell, &mut cmd, "redactor", &completions_dir).unwrap();
    }

    println!("cargo:warning=Shell completions generated in: {}", completions_dir.display());
}
