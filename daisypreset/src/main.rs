use clap::Parser;
use daisypreset_lib::config::{self, PresetOptions, ThemeChoice, ThemesOption};
use daisypreset_lib::preset::build_preset_with;
use daisypreset_lib::sources::SourceStylesheets;
use daisypreset_lib::style::postprocess::Postprocessor;
use daisypreset_lib::theming::ThemeCatalog;
use daisypreset_lib::PresetError;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "daisypreset")]
#[command(about = "Turn daisyUI stylesheets into an on-demand utility preset")]
struct Args {
    /// Directory holding base.css, styled.css, unstyled.css and the utility stylesheets.
    sources: PathBuf,

    /// TOML file with preset options. Flags override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Class-name prefix, e.g. `d-`.
    #[arg(long)]
    prefix: Option<String>,

    /// Use the unstyled component sources.
    #[arg(long)]
    unstyled: bool,

    /// Skip the base custom-property block.
    #[arg(long)]
    no_base: bool,

    /// Skip the utility stylesheets.
    #[arg(long)]
    no_utils: bool,

    /// `all`, `none` or a comma separated list of theme names.
    #[arg(long)]
    themes: Option<String>,

    /// Theme used for `prefers-color-scheme: dark`.
    #[arg(long)]
    dark_theme: Option<String>,

    /// Leave the CSS without vendor prefixes.
    #[arg(long)]
    no_autoprefix: bool,

    /// Print a JSON summary of the preset instead of CSS.
    #[arg(long)]
    json: bool,

    /// Utility classes to generate CSS for. Everything when empty.
    classes: Vec<String>,
}

fn main() {
    env_logger::init();

    // parse the args given in terminal
    let args: Args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), PresetError> {
    let options = options(args)?;
    let sources = SourceStylesheets::load_dir(&args.sources)?;
    let postprocessor = if args.no_autoprefix {
        Postprocessor::new()
    } else {
        Postprocessor::autoprefix()
    };

    let artifact = build_preset_with(&options, &sources, &postprocessor, &ThemeCatalog::builtin())?;

    if args.json {
        let summary = serde_json::to_string_pretty(&artifact.summary())
            .map_err(|err| PresetError::Print(err.to_string()))?;
        println!("{}", summary);
    } else if args.classes.is_empty() {
        println!("{}", artifact.generate_all());
    } else {
        println!("{}", artifact.generate(args.classes.iter().map(String::as_str)));
    }
    Ok(())
}

fn options(args: &Args) -> Result<PresetOptions, PresetError> {
    let mut options = match &args.config {
        Some(path) => config::load(path)?,
        None => PresetOptions::default(),
    };

    if args.unstyled {
        options.styled = false;
    }
    if args.no_base {
        options.base = false;
    }
    if args.no_utils {
        options.utils = false;
    }
    if let Some(prefix) = &args.prefix {
        options.prefix = prefix.clone();
    }
    if let Some(dark_theme) = &args.dark_theme {
        options.dark_theme = dark_theme.clone();
    }
    if let Some(themes) = &args.themes {
        options.themes = parse_themes(themes);
    }

    log::debug!("effective options: {:?}", options);
    Ok(options)
}

fn parse_themes(value: &str) -> ThemesOption {
    match value {
        "all" => ThemesOption::Enabled(true),
        "none" | "" => ThemesOption::Enabled(false),
        list => ThemesOption::List(
            list.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(|name| ThemeChoice::Named(name.to_owned()))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_flag_values() {
        assert_eq!(parse_themes("all"), ThemesOption::Enabled(true));
        assert_eq!(parse_themes("none"), ThemesOption::Enabled(false));
        assert_eq!(
            parse_themes("light, night"),
            ThemesOption::List(vec![
                ThemeChoice::Named("light".into()),
                ThemeChoice::Named("night".into()),
            ])
        );
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "daisypreset",
            "css",
            "--unstyled",
            "--no-base",
            "--prefix",
            "d-",
            "--themes",
            "all",
            "btn",
        ]);
        let options = options(&args).unwrap();
        assert!(!options.styled);
        assert!(!options.base);
        assert!(options.utils);
        assert_eq!(options.prefix, "d-");
        assert_eq!(options.themes, ThemesOption::Enabled(true));
        assert_eq!(args.classes, ["btn"]);
        assert!(!args.no_autoprefix);
    }

    #[test]
    fn autoprefix_can_be_turned_off() {
        let args = Args::parse_from(["daisypreset", "css", "--no-autoprefix"]);
        assert!(args.no_autoprefix);
        assert!(args.classes.is_empty());
    }
}
