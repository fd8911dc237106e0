use crossbeam_channel::{bounded, Receiver};
use log::error;

// Internal project modules
use segclock_core::constants::time::{MAX_RAW_READING, SIXTEENTHS_PER_SECOND};
use segclock_core::periph::DisplayPort;
use segclock_core::ClockController;
use segclock_peripherals::host::{ConsolePanel, HostClock, RemotePanel};
use segclock_peripherals::manual::ManualTimeSource;

// One display refresh per quarter second keeps the console responsive
// without hammering the panel stream.
const TICK_MILLIS: u64 = 250;

// A sweep advances one displayed minute per cycle unless told otherwise.
const DEFAULT_SWEEP_STEP: i32 = SIXTEENTHS_PER_SECOND * 60;

/// Configures command-line interface using clap
fn get_cli_config<'a>() -> clap::ArgMatches<'a> {
    let description = "Segmented clock display driver";
    clap::App::new("segclock")
        .version("0.1")
        .about(description)
        .subcommand(
            clap::SubCommand::with_name("wall")
                .about("Follow the host wall clock")
                .arg(
                    clap::Arg::with_name("offset")
                        .long("offset")
                        .takes_value(true)
                        .help("UTC offset in minutes, e.g. -420 for PDT"),
                )
                .arg(
                    clap::Arg::with_name("remote")
                        .long("remote")
                        .takes_value(true)
                        .help("Serve the panel stream on this TCP address instead of the console"),
                ),
        )
        .subcommand(
            clap::SubCommand::with_name("sweep")
                .about("Replay a full day through the pipeline")
                .arg(
                    clap::Arg::with_name("step")
                        .long("step")
                        .takes_value(true)
                        .help("Port counts (sixteenths of a second) per cycle"),
                ),
        )
        .get_matches()
}

fn int_arg(matches: &clap::ArgMatches, name: &str, default: i32) -> i32 {
    match matches.value_of(name) {
        Some(text) => match text.parse() {
            Ok(value) => value,
            Err(_) => {
                error!("Invalid --{} value: {}", name, text);
                default
            }
        },
        None => default,
    }
}

/// Main entry point for the clock driver
fn main() {
    env_logger::init();

    // Set up Ctrl-C handler with channel communication
    let (signal_sender, signal_receiver) = bounded(1);
    let handler_result = ctrlc::set_handler(move || {
        if signal_sender.is_full() {
            std::process::exit(-1); // Emergency exit if channel blocked
        }
        let _send_result = signal_sender.send(()); // Send shutdown signal
    });

    if let Err(e) = handler_result {
        error!("Signal handler failed: {:?}", e);
        return;
    }

    // Parse command-line arguments
    let cli_matches = get_cli_config();
    match cli_matches.subcommand() {
        ("sweep", Some(args)) => {
            run_sweep(int_arg(args, "step", DEFAULT_SWEEP_STEP), signal_receiver);
        }
        ("wall", Some(args)) => {
            let offset_minutes = int_arg(args, "offset", 0);
            match args.value_of("remote") {
                Some(addr) => {
                    let mut panel = RemotePanel::new(addr);
                    run_wall(offset_minutes, &mut panel, signal_receiver);
                }
                None => {
                    let mut panel = ConsolePanel::new();
                    run_wall(offset_minutes, &mut panel, signal_receiver);
                }
            }
        }
        _ => {
            // Bare invocation tracks the wall clock on the console
            let mut panel = ConsolePanel::new();
            run_wall(0, &mut panel, signal_receiver);
        }
    }
}

/// Drives the display from the host clock until Ctrl-C arrives
fn run_wall(offset_minutes: i32, panel: &mut dyn DisplayPort, shutdown: Receiver<()>) {
    let clock = HostClock::new(offset_minutes);
    let mut controller = ClockController::new(&clock, panel);

    loop {
        if !shutdown.is_empty() {
            break;
        }

        if controller.update().is_err() {
            // Fail-static: the previous pattern stays latched
            error!("Time source reading rejected, display unchanged");
        }

        std::thread::sleep(std::time::Duration::from_millis(TICK_MILLIS));
    }
}

/// Replays one whole day of port readings through the pipeline
fn run_sweep(step: i32, shutdown: Receiver<()>) {
    let step = if step > 0 {
        step
    } else {
        error!("Sweep step must be positive, using default");
        DEFAULT_SWEEP_STEP
    };

    let source = ManualTimeSource::new(0);
    let mut panel = ConsolePanel::new();
    let mut controller = ClockController::new(&source, &mut panel);

    let mut raw: i32 = 0;
    while raw <= MAX_RAW_READING {
        if !shutdown.is_empty() {
            break;
        }

        source.set(raw);
        if controller.update().is_err() {
            error!("Sweep rejected port value {}", raw);
        }

        match raw.checked_add(step) {
            Some(next) => raw = next,
            None => break,
        }
    }
}
