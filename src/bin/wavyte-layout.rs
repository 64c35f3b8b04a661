use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use wavyte_layout::{
    Aligned, Alignment, BoxSize, ColorBox, Curves, EdgeInsets, Fade, Flex, FlexList, Grid,
    GridCellSize, GridSpec, ImageSource, MediaClip, Node, Offset, Padding, Raster, RenderSession,
    RenderSessionOpts, Rgba8, Sequence, SizedBox, Slide, Stack, TracingTracer,
};

const BACKGROUND: Rgba8 = [18, 20, 28, 255];
const CORAL: Rgba8 = [255, 111, 97, 255];
const TEAL: Rgba8 = [0, 150, 136, 255];
const GOLD: Rgba8 = [255, 193, 7, 255];
const SLATE: Rgba8 = [96, 125, 139, 220];

#[derive(Parser, Debug)]
#[command(name = "wavyte-layout", version)]
struct Cli {
    /// Log layout and frame events to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one frame of the demo layout as a PNG.
    Frame(FrameArgs),
    /// Print the resolved layout of the demo as JSON.
    Report(DemoArgs),
}

#[derive(Args, Debug)]
struct DemoArgs {
    /// Output width in pixels.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 360)]
    height: u32,

    /// Easing curve for the animated strip (e.g. `linear`, `ease-in-out`).
    #[arg(long, default_value = "ease-in-out")]
    curve: String,

    /// Optional image shown in the first grid cell.
    #[arg(long)]
    image: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    demo: DemoArgs,

    /// Time in seconds.
    #[arg(long, default_value_t = 0.0)]
    t: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut opts = RenderSessionOpts::default();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
        opts.tracer = Arc::new(TracingTracer);
    }
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args, opts),
        Command::Report(args) => cmd_report(args, opts),
    }
}

fn cmd_frame(args: FrameArgs, opts: RenderSessionOpts) -> anyhow::Result<()> {
    let mut session = RenderSession::new(demo_tree(&args.demo)?, opts);
    session.resolve(args.demo.width, args.demo.height)?;
    let frame = session.render(args.t)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let png = Raster::clone(&frame).into_rgba_image()?;
    png.save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_report(args: DemoArgs, opts: RenderSessionOpts) -> anyhow::Result<()> {
    let mut session = RenderSession::new(demo_tree(&args)?, opts);
    session.resolve(args.width, args.height)?;
    println!("{}", session.report_json()?);
    Ok(())
}

fn fill(color: Rgba8) -> Node {
    Box::new(ColorBox::new(color, BoxSize::expand()))
}

fn demo_tree(args: &DemoArgs) -> anyhow::Result<Node> {
    let curve = Curves::by_name(&args.curve)
        .with_context(|| format!("unknown curve '{}'", args.curve))?;

    let header = FlexList::row(vec![
        Box::new(Flex::new(fill(CORAL))),
        Box::new(Flex::with_weight(fill(TEAL), 2)?),
    ])
    .with_gap(8);

    let first_cell: Node = match &args.image {
        Some(path) => {
            let image: Node = Box::new(MediaClip::new(ImageSource::open(path)?));
            Box::new(Aligned::new(Some(image), Alignment::Center))
        }
        None => fill(SLATE),
    };
    let half = GridCellSize::percent(50.0);
    let grid = Grid::new(
        vec![
            vec![first_cell, fill(GOLD)],
            vec![fill(TEAL), fill(CORAL)],
        ],
        GridSpec {
            column_widths: vec![half, half],
            row_heights: vec![half, half],
        },
    )?;

    let strip = Sequence::new(
        vec![
            Box::new(Slide::new(
                fill(GOLD),
                Offset::new(-1.0, 0.0),
                Offset::ZERO,
                1.5,
                curve.clone(),
            )?),
            Box::new(Fade::new(fill(GOLD), 1.0, 0.0, 1.5, curve)?),
        ],
        Alignment::Center,
    )?;
    let strip = SizedBox::new(
        BoxSize {
            height: Some(48),
            ..BoxSize::default()
        },
        Some(Box::new(strip)),
    );

    let column = FlexList::column(vec![
        Box::new(Flex::new(Box::new(header))),
        Box::new(Flex::with_weight(Box::new(grid), 3)?),
        Box::new(strip),
    ])
    .with_gap(8);

    Ok(Box::new(Stack::new(
        vec![
            fill(BACKGROUND),
            Box::new(Padding::new(EdgeInsets::all(16), Box::new(column))),
        ],
        Alignment::TopLeft,
    )))
}
