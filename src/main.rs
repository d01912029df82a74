//! The CLI interface for rotatez
//!
//! Use the `--help` flag to see the available options.
use color_eyre::eyre::{Result, eyre};
#[cfg(feature = "json")]
use rotatez::json;
use rotatez::{
    CursorPosition, DisplaySet, RotationArg, TargetSelector, cursor_position, query_displays,
};
use structopt::{StructOpt, clap::ArgGroup};

/// CLI arguments
#[derive(StructOpt, Debug)]
#[structopt(
    name = "rotatez",
    about = "Query, rotate and rearrange displays on macOS using the CLI.",
    group = ArgGroup::with_name("action").required(true)
)]
struct Opts {
    /// Show a detailed table with geometry, rotation and the cursor position
    #[structopt(short, long, group = "action")]
    info: bool,
    /// List displays
    #[structopt(short, long, group = "action")]
    list: bool,
    /// Select the target display
    #[structopt(
        short,
        long,
        allow_hyphen_values = true,
        long_help = "Select the target display by hex id. Shortcuts: `-1` for the \
                     built-in display, `0` for the main display, `1` for the first \
                     active non-built-in display."
    )]
    display: Option<TargetSelector>,
    /// Set the target display as the main display
    #[structopt(short, long, group = "action", requires = "display")]
    main: bool,
    /// Rotate the target display
    #[structopt(
        short,
        long,
        group = "action",
        requires = "display",
        allow_hyphen_values = true,
        long_help = "Rotate the target display. One of `0`, `90`, `180`, `270`, or `1` \
                     to toggle between 0 and 90 degrees."
    )]
    rotate: Option<RotationArg>,
    /// Print displays as JSON instead of a table
    #[cfg(feature = "json")]
    #[structopt(short, long)]
    json: bool,
    /// Output debug info
    #[structopt(short, long)]
    verbose: bool,
}

/// Entry point for `rotatez`.
fn main() -> Result<()> {
    color_eyre::install()?;

    let opts = Opts::from_args();

    let log_level = if opts.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level.as_str()),
    )
    .init();

    log::debug!("Parsed Opts:\n{:#?}", opts);

    let display_set = query_displays()?;
    log::debug!("Discovered displays:\n{}", display_set);

    if opts.list {
        #[cfg(feature = "json")]
        if opts.json {
            return print_list_json(&display_set);
        }

        print_list(&display_set);
        return Ok(());
    }

    if opts.info {
        let cursor = cursor_position()?;

        #[cfg(feature = "json")]
        if opts.json {
            return print_info_json(&display_set, &cursor);
        }

        print_info(&display_set, &cursor);
        return Ok(());
    }

    let selector = opts
        .display
        .ok_or_else(|| eyre!("No target display selected"))?;
    let target = display_set.resolve(selector)?;

    if opts.main {
        if target.is_main() {
            log::info!("Display {} already is the main display", target.id());
        } else {
            target.make_main()?;
            log::info!("Display {} is now the main display", target.id());
        }
    } else if let Some(rotation_arg) = opts.rotate {
        let rotation = rotation_arg.resolve(target.rotation());
        target.rotate(rotation)?;
        log::info!("Display {} rotated to {} degrees", target.id(), rotation);
    }

    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Prints the fixed-width display table for `--list`
fn print_list(display_set: &DisplaySet) {
    println!("|------------------------------------------------------|");
    println!("| ID         | resX | resY | Active | Main  | Internal |");
    println!("|------------------------------------------------------|");

    for display in display_set.displays() {
        let resolution = display.resolution();

        println!(
            "| {} | {:>4} | {:>4} | {:>6} | {:>5} | {:>8} |",
            display.id(),
            resolution.width,
            resolution.height,
            yes_no(display.is_active()),
            yes_no(display.is_main()),
            yes_no(display.is_builtin()),
        );
        println!("|------------------------------------------------------|");
    }
}

/// Prints the detailed geometry table for `--info`
fn print_info(display_set: &DisplaySet, cursor: &CursorPosition) {
    println!(
        " --- ------------    ------ ------    ------- ------- ------- -------    -------    -------- ------- ---------- "
    );
    println!(
        "| # | ID         |  | resX | resY |  | bX0   | bY0   | bX1   | bY1   |  | Angle |  | Active | Main  | Internal |"
    );
    println!(
        "|---|------------|  |------|------|  |-------|-------|-------|-------|  |-------|  |--------|-------|----------|"
    );

    let count = display_set.displays().len();
    for (i, display) in display_set.displays().enumerate() {
        let resolution = display.resolution();
        let bounds = display.bounds();

        println!(
            "| {} | {} |  | {:<4} | {:<4} |  | {:<5} | {:<5} | {:<5} | {:<5} |  | {:<5.0} |  | {:<6} | {:<5} | {:<8} |",
            display.unit(),
            display.id(),
            resolution.width,
            resolution.height,
            bounds.min.x,
            bounds.min.y,
            bounds.max.x,
            bounds.max.y,
            display.rotation(),
            yes_no(display.is_active()),
            yes_no(display.is_main()),
            yes_no(display.is_builtin()),
        );

        if i == count - 1 {
            println!(
                " --- ------------    ------ ------    ------- ------- ------- -------    -------    -------- ------- ---------- "
            );
        } else {
            println!(
                "|---|------------|  |------|------|  |-------|-------|-------|-------|  |-------|  |--------|-------|----------|"
            );
        }
    }

    println!();
    println!("Cursor position : {}", cursor);
}

#[cfg(feature = "json")]
fn print_list_json(display_set: &DisplaySet) -> Result<()> {
    let displays: Vec<_> = display_set
        .displays()
        .map(|d| json::display_to_json(&d))
        .collect();

    println!("{}", serde_json::to_string_pretty(&displays)?);
    Ok(())
}

#[cfg(feature = "json")]
fn print_info_json(display_set: &DisplaySet, cursor: &CursorPosition) -> Result<()> {
    let report = json::InfoReportJson {
        displays: display_set
            .displays()
            .map(|d| json::display_to_json(&d))
            .collect(),
        cursor: json::cursor_to_json(cursor),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
