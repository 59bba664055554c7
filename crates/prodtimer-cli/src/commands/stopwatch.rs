use std::io::Write;
use std::sync::mpsc::TryRecvError;
use std::time::{Duration, Instant};

use clap::Subcommand;
use prodtimer_core::{format_fine, Config, CoreError, EngineStatus, Event, StopwatchEngine};

#[derive(Subcommand)]
pub enum StopwatchAction {
    /// Run the stopwatch in the foreground
    Run {
        /// Stop automatically after this many milliseconds (for scripting)
        #[arg(long)]
        for_ms: Option<u64>,
        /// Print events and the final snapshot as JSON lines
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: StopwatchAction) -> Result<(), CoreError> {
    match action {
        StopwatchAction::Run { for_ms, json } => run_loop(for_ms, json),
    }
}

fn emit(event: &Event, json: bool) -> Result<(), CoreError> {
    if json {
        println!("{}", serde_json::to_string(event)?);
    }
    Ok(())
}

fn run_loop(for_ms: Option<u64>, json: bool) -> Result<(), CoreError> {
    let cfg = Config::load_or_default();
    let tick = Duration::from_millis(cfg.display.tick_ms.max(1));
    let mut engine = StopwatchEngine::new();
    let intents = super::stdin_intents();
    let mut out = std::io::stdout();

    if !json {
        eprintln!("enter = lap, p = pause/resume, r = reset, q = quit");
    }
    if let Some(event) = engine.start() {
        emit(&event, json)?;
    }

    let started = Instant::now();
    loop {
        match intents.try_recv() {
            Ok(cmd) => match cmd.as_str() {
                "" => {
                    if let Some(event) = engine.lap() {
                        emit(&event, json)?;
                    }
                }
                "p" => {
                    let event = if engine.status() == EngineStatus::Running {
                        engine.stop()
                    } else {
                        engine.start()
                    };
                    if let Some(event) = event {
                        emit(&event, json)?;
                    }
                }
                "r" => {
                    if let Some(event) = engine.reset() {
                        emit(&event, json)?;
                    }
                }
                "q" => break,
                _ => {}
            },
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {}
        }

        if let Some(limit) = for_ms {
            if started.elapsed().as_millis() as u64 >= limit {
                break;
            }
        }

        if !json {
            write!(out, "\r{}", format_fine(engine.elapsed_ms()))?;
            out.flush()?;
        }
        std::thread::sleep(tick);
    }

    engine.stop();
    if json {
        println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    } else {
        writeln!(out)?;
        for lap in engine.laps() {
            writeln!(
                out,
                "lap {:>3}  {}{}",
                lap.index,
                format_fine(lap.duration_ms),
                if lap.longer_than_previous { "  +" } else { "" }
            )?;
        }
        writeln!(out, "total    {}", format_fine(engine.elapsed_ms()))?;
    }
    Ok(())
}
