//! Step/impulse response command: run a configured filter against a unit
//! excitation and emit CSV, next to the sampled continuous reference.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use lisse_core::{Filter, LowPass, Prototype};

use super::{CliOrder, CliTransform};

/// Excitation applied to the filter.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ResponseKind {
    /// Unit step: input 1 from sample 0 on.
    Step,
    /// Unit impulse: input 1 at sample 0, then 0.
    Impulse,
}

#[derive(Args)]
pub struct ResponseArgs {
    /// Excitation kind
    #[arg(long, value_enum, default_value = "step")]
    kind: ResponseKind,

    /// Filter order
    #[arg(long, value_enum, default_value = "second")]
    order: CliOrder,

    /// Discretization method
    #[arg(long, value_enum, default_value = "bilinear")]
    transform: CliTransform,

    /// Sampling period in seconds
    #[arg(long, default_value = "0.01")]
    te: f64,

    /// Time constant in seconds (first order)
    #[arg(long, default_value = "0.1")]
    tau: f64,

    /// Natural frequency in rad/s (second order)
    #[arg(long, default_value = "6.283185307179586")]
    w0: f64,

    /// Quality factor (second order)
    #[arg(long, default_value = "0.707")]
    q: f64,

    /// Number of samples to emit
    #[arg(long, default_value = "200")]
    steps: usize,

    /// Output CSV file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Continuous unit-step response of the first-order prototype at time `t`.
fn first_order_step(tau: f64, t: f64) -> f64 {
    1.0 - (-t / tau).exp()
}

/// Continuous impulse response of the first-order prototype at time `t`.
fn first_order_impulse(tau: f64, t: f64) -> f64 {
    (-t / tau).exp() / tau
}

/// Continuous unit-step response of the second-order prototype at time `t`,
/// branching on the damping regime.
fn second_order_step(w0: f64, q: f64, t: f64) -> f64 {
    let sigma = w0 / (2.0 * q);
    if q > 0.5 {
        let wd = w0 * (1.0 - 1.0 / (4.0 * q * q)).sqrt();
        1.0 - (-sigma * t).exp() * ((wd * t).cos() + sigma / wd * (wd * t).sin())
    } else if q < 0.5 {
        let we = w0 * (1.0 / (4.0 * q * q) - 1.0).sqrt();
        let (s1, s2) = (-sigma + we, -sigma - we);
        1.0 + (s2 * (s1 * t).exp() - s1 * (s2 * t).exp()) / (s1 - s2)
    } else {
        1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
    }
}

/// Continuous impulse response of the second-order prototype at time `t`.
fn second_order_impulse(w0: f64, q: f64, t: f64) -> f64 {
    let sigma = w0 / (2.0 * q);
    if q > 0.5 {
        let wd = w0 * (1.0 - 1.0 / (4.0 * q * q)).sqrt();
        w0 * w0 / wd * (-sigma * t).exp() * (wd * t).sin()
    } else if q < 0.5 {
        let we = w0 * (1.0 / (4.0 * q * q) - 1.0).sqrt();
        let (s1, s2) = (-sigma + we, -sigma - we);
        w0 * w0 * ((s1 * t).exp() - (s2 * t).exp()) / (s1 - s2)
    } else {
        w0 * w0 * t * (-w0 * t).exp()
    }
}

pub fn run(args: ResponseArgs) -> anyhow::Result<()> {
    let prototype = match args.order {
        CliOrder::First => Prototype::FirstOrder {
            te: args.te,
            tau: args.tau,
        },
        CliOrder::Second => Prototype::SecondOrder {
            te: args.te,
            w0: args.w0,
            q: args.q,
        },
    };
    let mut filter = LowPass::configure(prototype, args.transform.into())
        .context("deriving filter coefficients")?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };

    writeln!(out, "k,t,output,reference")?;
    for k in 0..args.steps {
        let input = match args.kind {
            ResponseKind::Step => 1.0,
            ResponseKind::Impulse => {
                if k == 0 {
                    1.0
                } else {
                    0.0
                }
            }
        };
        let y = filter.step(input)?;

        let t = k as f64 * args.te;
        // The reference is the continuous response the matched transforms
        // reproduce exactly: y(k·Te) for a step, Te·h(k·Te) for an impulse.
        let reference = match (args.order, args.kind) {
            (CliOrder::First, ResponseKind::Step) => first_order_step(args.tau, t),
            (CliOrder::First, ResponseKind::Impulse) => {
                args.te * first_order_impulse(args.tau, t)
            }
            (CliOrder::Second, ResponseKind::Step) => second_order_step(args.w0, args.q, t),
            (CliOrder::Second, ResponseKind::Impulse) => {
                args.te * second_order_impulse(args.w0, args.q, t)
            }
        };
        writeln!(out, "{k},{t},{y},{reference}")?;
    }
    out.flush()?;

    if let Some(path) = &args.output {
        println!("Wrote {} samples to {}", args.steps, path.display());
    }
    Ok(())
}
