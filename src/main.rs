use clap::Parser;
use gene_aligner::{
    Aligner, AlignerConfig, AlignmentMode, AlignmentParams, ScoringScheme, DEFAULT_BAND_RADIUS,
    DEFAULT_PREVIEW_WIDTH,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First sequence (rows of the matrix)
    seq1: String,

    /// Second sequence (columns of the matrix)
    seq2: String,

    /// Restrict the search to a diagonal band
    #[arg(short, long)]
    banded: bool,

    /// Number of leading symbols of each sequence to align
    #[arg(short, long, default_value_t = 1000)]
    length: i64,

    /// Band half-width
    #[arg(short, long, default_value_t = DEFAULT_BAND_RADIUS)]
    radius: usize,

    /// Fail instead of printing a banded result that is not proven optimal
    #[arg(long)]
    strict_band: bool,

    /// Charge a full substitution for case-only differences in banded mode
    #[arg(long)]
    case_sensitive: bool,

    /// Number of alignment columns to print
    #[arg(short, long, default_value_t = DEFAULT_PREVIEW_WIDTH)]
    width: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut scoring = ScoringScheme::default();
    if args.case_sensitive {
        scoring = scoring.case_sensitive();
    }
    let config = AlignerConfig::new()
        .with_scoring(scoring)?
        .with_band_radius(args.radius)?
        .with_strict_band(args.strict_band)
        .with_preview_width(args.width);

    let aligner = Aligner::new(config)?;
    let params = AlignmentParams::new(AlignmentMode::from_banded(args.banded), args.length);
    let result = aligner.align(args.seq1.as_bytes(), args.seq2.as_bytes(), params)?;

    let (row1, row2) = result.preview(aligner.config().preview_width);
    println!("Score: {}", result.score);
    println!("{}", String::from_utf8_lossy(row1));
    println!("{}", String::from_utf8_lossy(row2));
    println!("Optimality: {:?}", result.optimality);
    println!("{:?}", result.stats());

    Ok(())
}
