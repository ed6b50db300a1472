use std::env;
use std::path::PathBuf;

#[derive(Debug)]
pub struct Args {
    pub screen: PathBuf,
    pub avatar: PathBuf,
    pub left: u32,
    pub right: Option<u32>,
    pub edges_path: Option<PathBuf>,
    pub crop_dir: Option<PathBuf>,
    pub json: bool,
    pub debug_mode: bool,
}

impl Args {
    pub fn parse() -> Option<Self> {
        Self::parse_from(env::args().skip(1))
    }

    pub fn parse_from<I: IntoIterator<Item = String>>(args: I) -> Option<Self> {
        let mut screen: Option<PathBuf> = None;
        let mut avatar: Option<PathBuf> = None;
        let mut left: u32 = 0;
        let mut right: Option<u32> = None;
        let mut edges_path: Option<PathBuf> = None;
        let mut crop_dir: Option<PathBuf> = None;
        let mut json = false;
        let mut debug_mode = false;

        for arg in args {
            if arg == "--help" || arg == "-h" {
                print_help();
                return None;
            } else if arg == "--version" || arg == "-v" {
                println!("Jump Vision v{}", env!("CARGO_PKG_VERSION"));
                return None;
            } else if arg == "--debug" {
                debug_mode = true;
            } else if arg == "--json" {
                json = true;
            } else if let Some(val) = arg.strip_prefix("--screen=") {
                screen = Some(PathBuf::from(val));
            } else if let Some(val) = arg.strip_prefix("--avatar=") {
                avatar = Some(PathBuf::from(val));
            } else if let Some(val) = arg.strip_prefix("--edges=") {
                edges_path = Some(PathBuf::from(val));
            } else if let Some(val) = arg.strip_prefix("--crop-dir=") {
                crop_dir = Some(PathBuf::from(val));
            } else if let Some(val) = arg.strip_prefix("--left=") {
                left = parse_column("left", val)?;
            } else if let Some(val) = arg.strip_prefix("--right=") {
                right = Some(parse_column("right", val)?);
            } else {
                eprintln!("❌ Unknown argument: {}", arg);
                print_help();
                return None;
            }
        }

        let (Some(screen), Some(avatar)) = (screen, avatar) else {
            eprintln!("❌ Both --screen=<png> and --avatar=<png> are required");
            print_help();
            return None;
        };

        Some(Args {
            screen,
            avatar,
            left,
            right,
            edges_path,
            crop_dir,
            json,
            debug_mode,
        })
    }
}

fn parse_column(name: &str, val: &str) -> Option<u32> {
    match val.parse::<u32>() {
        Ok(col) => Some(col),
        Err(_) => {
            eprintln!("❌ Invalid {} column: {}", name, val);
            None
        }
    }
}

fn print_help() {
    println!("🦘 Jump Vision - avatar and platform locator");
    println!();
    println!("USAGE:");
    println!("    jump-vision --screen=<png> --avatar=<png> [FLAGS]");
    println!();
    println!("FLAGS:");
    println!("    --screen=PATH       Screenshot to analyze");
    println!("    --avatar=PATH       Avatar template image");
    println!("    --left=N            First column of the platform search (default 0)");
    println!("    --right=N           End column of the platform search (default: width)");
    println!("    --edges=PATH        Write the edge map to PATH");
    println!("    --crop-dir=DIR      Write score.png and platform.png crops into DIR");
    println!("    --json              Print the result as JSON");
    println!("    --debug             Enable debug logging");
    println!("    --help, -h          Show this help message");
    println!("    --version, -v       Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    jump-vision --screen=screen.png --avatar=avatar.png");
    println!("    jump-vision --screen=screen.png --avatar=avatar.png --edges=edge.png --debug");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Option<Args> {
        Args::parse_from(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_required_paths() {
        assert!(parse(&["--screen=a.png"]).is_none());
        let args = parse(&["--screen=a.png", "--avatar=b.png"]).unwrap();
        assert_eq!(args.screen, PathBuf::from("a.png"));
        assert_eq!(args.left, 0);
        assert_eq!(args.right, None);
        assert!(!args.json && !args.debug_mode);
    }

    #[test]
    fn test_columns_and_flags() {
        let args = parse(&[
            "--screen=a.png",
            "--avatar=b.png",
            "--left=100",
            "--right=540",
            "--edges=e.png",
            "--json",
            "--debug",
        ])
        .unwrap();
        assert_eq!(args.left, 100);
        assert_eq!(args.right, Some(540));
        assert_eq!(args.edges_path, Some(PathBuf::from("e.png")));
        assert!(args.json && args.debug_mode);
    }

    #[test]
    fn test_bad_input_rejected() {
        assert!(parse(&["--screen=a.png", "--avatar=b.png", "--left=abc"]).is_none());
        assert!(parse(&["--screen=a.png", "--avatar=b.png", "--bogus"]).is_none());
    }
}
