use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use strata::{SheetBuilder, StrataError};

/// Generate layout utility CSS and evaluate fluid type scales.
#[derive(Debug, Parser)]
#[command(bin_name = "strata")]
#[command(version)]
#[command(arg_required_else_help(true))]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    theme: ThemeOptions,
}

#[derive(Debug, Args)]
struct ThemeOptions {
    #[arg(global = true, long, short = 'c', help = "JSON theme file applied over the standard sheet.")]
    config: Option<PathBuf>,

    #[arg(
        global = true,
        long = "set",
        value_name = "NAME=LENGTH",
        help = "Override a setting (space, grid-min, measure, gutter), e.g. --set space=1.5rem."
    )]
    settings: Vec<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the full stylesheet.
    Build {
        #[arg(long, short = 'o', help = "Output file. Defaults to stdout.")]
        out: Option<PathBuf>,
    },
    /// Print the interpolated size of a fluid context at a viewport width.
    Size {
        #[arg(long, short = 'w')]
        viewport: f64,
        #[arg(long, default_value = "h1")]
        context: String,
    },
    /// Print the rules of a single preset, e.g. `grid-cols-3`.
    Preset { name: String },
}

fn builder_for(theme: &ThemeOptions) -> Result<SheetBuilder, StrataError> {
    let mut builder = SheetBuilder::new();
    if let Some(path) = &theme.config {
        builder = builder.with_config_file(path)?;
    }
    for setting in &theme.settings {
        // `name=value` and `name: value` are both accepted.
        let declaration = setting.replacen('=', ":", 1);
        builder = builder.with_inline_settings(&declaration)?;
    }
    Ok(builder)
}

fn main() -> Result<(), StrataError> {
    env_logger::init();

    let cli = Cli::parse();
    let builder = builder_for(&cli.theme)?;

    match cli.command {
        Command::Build { out: Some(path) } => {
            builder.build().generate_to_file(&path)?;
        }
        Command::Build { out: None } => {
            builder.build().write_to(&mut io::stdout().lock())?;
        }
        Command::Size { viewport, context } => {
            let size = builder.sheet().size_for(&context, viewport)?;
            println!("{}", size);
        }
        Command::Preset { name } => {
            for rule in builder.sheet().preset_rules(&name)? {
                println!("{}", rule);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata::Length;

    fn options(settings: &[&str]) -> ThemeOptions {
        ThemeOptions {
            config: None,
            settings: settings.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_set_accepts_both_separators() {
        let builder = builder_for(&options(&["space=2rem", "gutter: 3ch", "measure=65ch;"])).unwrap();
        let settings = &builder.sheet().settings;
        assert_eq!(settings.space, Length::rem(2.0));
        assert_eq!(settings.gutter, Length::ch(3.0));
        assert_eq!(settings.measure, Length::ch(65.0));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        assert!(matches!(
            builder_for(&options(&["space=wide"])),
            Err(StrataError::Setting(_))
        ));
        assert!(builder_for(&options(&["colour=1rem"])).is_err());
        assert!(builder_for(&options(&["space"])).is_err());
    }

    #[test]
    fn test_global_options_follow_subcommand() {
        let cli = Cli::try_parse_from(["strata", "size", "-w", "54", "--set", "space=1.5rem"]).unwrap();
        assert_eq!(cli.theme.settings, vec!["space=1.5rem".to_string()]);
        match cli.command {
            Command::Size { viewport, context } => {
                assert_eq!(viewport, 54.0);
                assert_eq!(context, "h1");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let theme = ThemeOptions {
            config: Some(PathBuf::from("does/not/exist.json")),
            settings: Vec::new(),
        };
        assert!(matches!(builder_for(&theme), Err(StrataError::Io(_))));
    }
}
