use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::error::Error;

use throwsim::wind::WindKind;
use throwsim::{
    run_velocity_spread, summarize_spread, SpreadParams, SpreadSummary, ThrowConditions,
    ThrowSimulator, ThrowSolution,
};

#[derive(Parser)]
#[command(name = "throwsim")]
#[command(version = "0.1.0")]
#[command(about = "Throw-velocity estimator and trajectory calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the minimum release speed for a throw
    Estimate {
        /// Target distance (feet)
        #[arg(short = 'd', long)]
        distance: f64,

        /// Launch angle (degrees)
        #[arg(short = 'a', long, default_value = "45.0")]
        angle: f64,

        /// Wind speed (mph, positive = tailwind)
        #[arg(short = 'w', long, default_value = "0.0")]
        wind: f64,

        /// Backspin (rpm)
        #[arg(short = 'b', long, default_value = "0.0")]
        backspin: f64,

        /// Sidespin (rpm, sign is direction)
        #[arg(short = 's', long, default_value = "0.0")]
        sidespin: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Calculate the rendered flight arc for a throw
    Trajectory {
        /// Target distance (feet)
        #[arg(short = 'd', long)]
        distance: f64,

        /// Launch angle (degrees)
        #[arg(short = 'a', long, default_value = "45.0")]
        angle: f64,

        /// Wind speed (mph, positive = tailwind)
        #[arg(short = 'w', long, default_value = "0.0")]
        wind: f64,

        /// Backspin (rpm)
        #[arg(short = 'b', long, default_value = "0.0")]
        backspin: f64,

        /// Sidespin (rpm, sign is direction)
        #[arg(short = 's', long, default_value = "0.0")]
        sidespin: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Full output (show all arc points)
        #[arg(long)]
        full: bool,
    },

    /// Run a velocity spread simulation over perturbed conditions
    Spread {
        /// Target distance (feet)
        #[arg(short = 'd', long)]
        distance: f64,

        /// Launch angle (degrees)
        #[arg(short = 'a', long, default_value = "45.0")]
        angle: f64,

        /// Wind speed (mph, positive = tailwind)
        #[arg(short = 'w', long, default_value = "0.0")]
        wind: f64,

        /// Backspin (rpm)
        #[arg(short = 'b', long, default_value = "0.0")]
        backspin: f64,

        /// Sidespin (rpm, sign is direction)
        #[arg(short = 's', long, default_value = "0.0")]
        sidespin: f64,

        /// Number of simulations
        #[arg(short = 'n', long, default_value = "1000")]
        num_sims: usize,

        /// Distance standard deviation (feet)
        #[arg(long, default_value = "5.0")]
        distance_std: f64,

        /// Angle standard deviation (degrees)
        #[arg(long, default_value = "2.0")]
        angle_std: f64,

        /// Wind standard deviation (mph)
        #[arg(long, default_value = "3.0")]
        wind_std: f64,

        /// Backspin standard deviation (rpm)
        #[arg(long, default_value = "200.0")]
        backspin_std: f64,

        /// Sidespin standard deviation (rpm)
        #[arg(long, default_value = "150.0")]
        sidespin_std: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "summary")]
        output: SpreadOutput,
    },

    /// Display simulator information
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
    Table,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SpreadOutput {
    Summary,
    Json,
    Statistics,
}

#[derive(Debug, Serialize, Deserialize)]
struct ArcPoint {
    time_s: f64,
    x_ft: f64,
    y_ft: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct SolutionReport {
    velocity_mph: u32,
    max_height_ft: f64,
    max_distance_ft: f64,
    time_of_flight_s: f64,
    points: Vec<ArcPoint>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SpreadReport {
    num_samples: usize,
    mean_mph: f64,
    std_mph: f64,
    min_mph: u32,
    max_mph: u32,
    no_solution_count: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            distance,
            angle,
            wind,
            backspin,
            sidespin,
            output,
        } => {
            let conditions = conditions_from_args(distance, angle, wind, backspin, sidespin);
            let solution = ThrowSimulator::new(conditions).solve();
            display_estimate(&solution, wind, output)?;
        }

        Commands::Trajectory {
            distance,
            angle,
            wind,
            backspin,
            sidespin,
            output,
            full,
        } => {
            let conditions = conditions_from_args(distance, angle, wind, backspin, sidespin);
            let solution = ThrowSimulator::new(conditions).solve();
            display_trajectory(&solution, output, full)?;
        }

        Commands::Spread {
            distance,
            angle,
            wind,
            backspin,
            sidespin,
            num_sims,
            distance_std,
            angle_std,
            wind_std,
            backspin_std,
            sidespin_std,
            output,
        } => {
            let base = conditions_from_args(distance, angle, wind, backspin, sidespin);
            let params = SpreadParams {
                num_simulations: num_sims,
                distance_std_ft: distance_std,
                angle_std_deg: angle_std,
                wind_std_mph: wind_std,
                backspin_std_rpm: backspin_std,
                sidespin_std_rpm: sidespin_std,
            };

            let results = run_velocity_spread(&base, &params)?;
            let summary = summarize_spread(&results)?;
            display_spread(&summary, output)?;
        }

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║        THROW SIMULATOR v0.1.0          ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Minimum-release-speed estimator and    ║");
            println!("║ flight arc generator for throwing      ║");
            println!("║ velocity training.                     ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Features:                              ║");
            println!("║ • Vacuum solution + drag correction    ║");
            println!("║ • Magnus backspin/sidespin terms       ║");
            println!("║ • Wind carry adjustment                ║");
            println!("║ • Velocity spread simulation           ║");
            println!("║ • Multiple output formats              ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn conditions_from_args(
    distance: f64,
    angle: f64,
    wind: f64,
    backspin: f64,
    sidespin: f64,
) -> ThrowConditions {
    ThrowConditions {
        distance_ft: distance,
        launch_angle_deg: angle,
        wind_mph: wind,
        backspin_rpm: backspin,
        sidespin_rpm: sidespin,
    }
}

fn solution_report(solution: &ThrowSolution) -> SolutionReport {
    SolutionReport {
        velocity_mph: solution.velocity_mph,
        max_height_ft: solution.max_height_ft,
        max_distance_ft: solution.max_distance_ft,
        time_of_flight_s: solution.time_of_flight_s,
        points: solution
            .points
            .iter()
            .map(|p| ArcPoint {
                time_s: p.time_s,
                x_ft: p.position.x,
                y_ft: p.position.y,
            })
            .collect(),
    }
}

fn display_estimate(
    solution: &ThrowSolution,
    wind_mph: f64,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            let mut report = solution_report(solution);
            report.points.clear();
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        OutputFormat::Csv => {
            println!("velocity_mph,max_height_ft,max_distance_ft,time_of_flight_s");
            println!(
                "{},{:.2},{:.2},{:.3}",
                solution.velocity_mph,
                solution.max_height_ft,
                solution.max_distance_ft,
                solution.time_of_flight_s
            );
        }

        OutputFormat::Table => {
            if solution.velocity_mph == 0 {
                println!("No solution: launch angle must be between 0° and 90°.");
                return Ok(());
            }

            println!("╔════════════════════════════════════════╗");
            println!("║         RELEASE SPEED ESTIMATE         ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Required Speed:    {:>8} mph        ║", solution.velocity_mph);
            println!("║ Max Height:        {:>8.1} ft         ║", solution.max_height_ft);
            println!("║ Carry:             {:>8.1} ft         ║", solution.max_distance_ft);
            println!("║ Time of Flight:    {:>8.2} s          ║", solution.time_of_flight_s);
            println!("║ Wind:              {:>10}          ║", WindKind::from_mph(wind_mph).label());
            println!("╚════════════════════════════════════════╝");

            if let Some(breakdown) = &solution.breakdown {
                println!();
                println!("Correction pipeline (ft/s):");
                println!("  Effective distance: {:.1} ft", breakdown.effective_distance_ft);
                println!("  Vacuum solution:    {:.2}", breakdown.vacuum_fps);
                println!("  + drag:             {:.2}", breakdown.drag_corrected_fps);
                println!("  + backspin lift:    {:.2}", breakdown.backspin_adjusted_fps);
                println!("  + sidespin drag:    {:.2}", breakdown.sidespin_adjusted_fps);
                println!("  + angle efficiency: {:.2}", breakdown.angle_adjusted_fps);
            }
        }
    }

    Ok(())
}

fn display_trajectory(
    solution: &ThrowSolution,
    format: OutputFormat,
    full: bool,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&solution_report(solution))?);
        }

        OutputFormat::Csv => {
            println!("time_s,x_ft,y_ft");
            for p in &solution.points {
                println!("{:.3},{:.2},{:.2}", p.time_s, p.position.x, p.position.y);
            }
        }

        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║           FLIGHT ARC RESULTS           ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Release Speed:     {:>8} mph        ║", solution.velocity_mph);
            println!("║ Max Height:        {:>8.1} ft         ║", solution.max_height_ft);
            println!("║ Carry:             {:>8.1} ft         ║", solution.max_distance_ft);
            println!("║ Time of Flight:    {:>8.2} s          ║", solution.time_of_flight_s);
            println!("║ Points:            {:>8}            ║", solution.points.len());
            println!("╚════════════════════════════════════════╝");

            println!();
            println!("┌──────────┬──────────┬──────────┐");
            println!("│ Time (s) │  X (ft)  │  Y (ft)  │");
            println!("├──────────┼──────────┼──────────┤");

            let step = if full {
                1
            } else {
                (solution.points.len() / 10).max(1)
            };
            for (i, p) in solution.points.iter().enumerate() {
                if i % step == 0 || i == solution.points.len() - 1 {
                    println!(
                        "│ {:>8.3} │ {:>8.2} │ {:>8.2} │",
                        p.time_s, p.position.x, p.position.y
                    );
                }
            }
            println!("└──────────┴──────────┴──────────┘");
        }
    }

    Ok(())
}

fn display_spread(summary: &SpreadSummary, format: SpreadOutput) -> Result<(), Box<dyn Error>> {
    let report = SpreadReport {
        num_samples: summary.num_samples,
        mean_mph: summary.mean_mph,
        std_mph: summary.std_mph,
        min_mph: summary.min_mph,
        max_mph: summary.max_mph,
        no_solution_count: summary.no_solution_count,
    };

    match format {
        SpreadOutput::Summary => {
            println!("╔════════════════════════════════════════╗");
            println!("║       VELOCITY SPREAD SIMULATION       ║");
            println!("║       {:>6} samples                  ║", report.num_samples);
            println!("╠════════════════════════════════════════╣");
            println!("║ Mean:              {:>8.1} mph        ║", report.mean_mph);
            println!("║ Std Dev:           {:>8.2} mph        ║", report.std_mph);
            println!("║ Min:               {:>8} mph        ║", report.min_mph);
            println!("║ Max:               {:>8} mph        ║", report.max_mph);
            println!("║ No Solution:       {:>8}            ║", report.no_solution_count);
            println!("╚════════════════════════════════════════╝");
        }

        SpreadOutput::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        SpreadOutput::Statistics => {
            println!("metric,value");
            println!("num_samples,{}", report.num_samples);
            println!("mean_mph,{:.2}", report.mean_mph);
            println!("std_mph,{:.2}", report.std_mph);
            println!("min_mph,{}", report.min_mph);
            println!("max_mph,{}", report.max_mph);
            println!("no_solution_count,{}", report.no_solution_count);
        }
    }

    Ok(())
}
