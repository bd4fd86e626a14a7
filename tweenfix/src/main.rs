//! Main binary entry point for `tweenfix`.
//!
//! This binary simply delegates to the shared `entry_point::run_with_args()` function
//! so it behaves exactly like the `tweenfix` binary from `tweenfix-cli`.

use anyhow::Result;

fn main() -> Result<()> {
    let code = tweenfix::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
