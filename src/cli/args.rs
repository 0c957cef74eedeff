use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "resume-pdf")]
#[command(
    author,
    version,
    about = "Lay out a resume markup file into a paginated PDF"
)]
pub struct Args {
    /// Input resume markup file path
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output PDF file path (defaults to input with .pdf extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Page size (overrides the file's %PageSize directive)
    #[arg(short = 's', long, value_enum)]
    pub page_size: Option<PageSize>,

    /// Page orientation
    #[arg(long, value_enum, default_value = "portrait")]
    pub orientation: Orientation,

    /// Page margin in mm (overrides the file's %Margin directive)
    #[arg(short, long)]
    pub margin: Option<f32>,

    /// Document title (overrides the file's %Title directive)
    #[arg(long)]
    pub title: Option<String>,

    /// Skip stream compression of the finished PDF
    #[arg(long)]
    pub no_compress: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PageSize {
    Letter,
    A4,
    Legal,
}

impl PageSize {
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PageSize::Letter => (215.9, 279.4),
            PageSize::A4 => (210.0, 297.0),
            PageSize::Legal => (215.9, 355.6),
        }
    }

    /// Look up a page size by name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "a4" => Some(PageSize::A4),
            "letter" => Some(PageSize::Letter),
            "legal" => Some(PageSize::Legal),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Apply the orientation to portrait (width, height) dimensions
    pub fn apply(&self, (w, h): (f32, f32)) -> (f32, f32) {
        match self {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

impl Args {
    /// Get the output path, defaulting to input with .pdf extension
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("pdf"))
    }

    pub fn compress(&self) -> bool {
        !self.no_compress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &str) -> Args {
        Args {
            input: PathBuf::from(input),
            output: None,
            page_size: None,
            orientation: Orientation::Portrait,
            margin: None,
            title: None,
            no_compress: false,
            verbose: 0,
        }
    }

    #[test]
    fn test_default_output_path() {
        let a = args("cv/resume.txt");
        assert_eq!(a.output_path(), PathBuf::from("cv/resume.pdf"));
    }

    #[test]
    fn test_explicit_output_path() {
        let mut a = args("resume.txt");
        a.output = Some(PathBuf::from("out/me.pdf"));
        assert_eq!(a.output_path(), PathBuf::from("out/me.pdf"));
    }

    #[test]
    fn test_page_size_from_name() {
        assert_eq!(PageSize::from_name("A4"), Some(PageSize::A4));
        assert_eq!(PageSize::from_name(" letter "), Some(PageSize::Letter));
        assert_eq!(PageSize::from_name("tabloid"), None);
    }

    #[test]
    fn test_landscape_swaps_dimensions() {
        let (w, h) = Orientation::Landscape.apply(PageSize::A4.dimensions_mm());
        assert!((w - 297.0).abs() < 0.01);
        assert!((h - 210.0).abs() < 0.01);
    }

    #[test]
    fn test_parse_from_command_line() {
        let a = Args::try_parse_from(["resume-pdf", "in.txt", "-s", "letter", "-m", "20", "-vv"])
            .unwrap();
        assert_eq!(a.page_size, Some(PageSize::Letter));
        assert_eq!(a.margin, Some(20.0));
        assert_eq!(a.verbose, 2);
        assert!(a.compress());
    }
}
