use clap::{Parser, Subcommand};
use piekit::color;
use piekit::hit::{Bounds, Point};
use pieview::chart::{ChartState, DEFAULT_SIZE};
use pieview::config;
use pieview::events::AppEvent;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pieview",
    version,
    about = "Pie chart slices, gradients and hit-testing",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Chart description to use instead of the per-user config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Width and height of the area the pie is drawn in; one value gives a square
    #[arg(
        short,
        long,
        global = true,
        num_args = 1..=2,
        value_names = ["W", "H"],
        default_values_t = [DEFAULT_SIZE]
    )]
    size: Vec<f64>,
}

impl Cli {
    fn bounds(&self) -> Bounds {
        match self.size[..] {
            [width, height] => Bounds::from_size(width, height),
            [side] => Bounds::from_size(side, side),
            _ => Bounds::from_size(DEFAULT_SIZE, DEFAULT_SIZE),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// List the slices and their angles
    Slices,
    /// List the color assigned to each slice
    Colors,
    /// Report which slice is under a pointer position
    #[command(allow_negative_numbers = true)]
    Hit { x: f64, y: f64 },
    /// Write the sample chart description to the config path
    Init,
    /// Render the chart to a PNG file
    #[cfg(feature = "render")]
    Render { output: PathBuf },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init => {
            let path = config::write_default_config(cli.config.as_deref())?;
            println!("{}", path.display());
        }
        Commands::Slices => print_slices(&load_state(&cli)?),
        Commands::Colors => {
            let state = load_state(&cli)?;
            for (point, c) in state.data.iter().zip(&state.slice_colors) {
                println!("{:<16} {}", point.name.as_str(), color::to_hex(c));
            }
        }
        Commands::Hit { x, y } => {
            let mut state = load_state(&cli)?;
            state.update(AppEvent::PointerMove(Point::new(*x, *y)));
            match (state.active_index(), state.active_slice()) {
                (Some(i), Some((point, slice))) => {
                    println!("{} {} {}", i, point.name, slice.percentage_label())
                }
                _ => println!("none"),
            }
        }
        #[cfg(feature = "render")]
        Commands::Render { output } => pieview::chart::render_png(&load_state(&cli)?, output)?,
    }

    Ok(())
}

fn load_state(cli: &Cli) -> anyhow::Result<ChartState> {
    let config = config::load_or_sample(cli.config.as_deref());
    let state = ChartState::from_config(&config, cli.bounds());
    if let Some(e) = state.slice_error() {
        anyhow::bail!("Cannot lay out chart: {}", e);
    }
    Ok(state)
}

fn print_slices(state: &ChartState) {
    println!(
        "{:>3}  {:<16} {:>8} {:>8} {:>10} {:>5}",
        "#", "name", "start", "end", "value", "%"
    );
    for (i, (point, slice)) in state.data.iter().zip(&state.slices).enumerate() {
        println!(
            "{:>3}  {:<16} {:>8.2} {:>8.2} {:>10} {:>5}",
            i,
            point.name.as_str(),
            slice.start_deg,
            slice.end_deg,
            slice.value,
            slice.percentage_label()
        );
    }
}
