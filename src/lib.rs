//! Collatz trajectory visualizer.
//!
//! Generates the Collatz sequence for a starting value and renders it as
//! a polar "antlion pit": radius is `log2` of the value, angle is the
//! deviation of that logarithm from its nearest integer, so the powers
//! of two form a central tower the trajectory funnels around.

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

pub mod color;
pub mod config;
pub mod plot;
pub mod polar;
pub mod sequence;

#[derive(Parser, Debug, Default)]
#[command(name = "antlion")]
#[command(author, version, about = "Collatz trajectory visualizer - polar antlion pit plots")]
pub struct Args {
    /// Starting value of the trajectory (a positive integer)
    #[arg(required_unless_present_any = ["init_config", "completions"])]
    pub n: Option<u128>,

    /// Output image path (.svg for vector output, anything else is a bitmap)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Color scheme: classic, heat, ocean, mono
    #[arg(long)]
    pub colors: Option<String>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Skip the ascent/descent legend
    #[arg(long)]
    pub no_legend: bool,

    /// Custom plot caption
    #[arg(long)]
    pub title: Option<String>,

    /// Write a default config file to the XDG config path and exit
    #[arg(long)]
    pub init_config: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum)]
    pub completions: Option<Shell>,
}
