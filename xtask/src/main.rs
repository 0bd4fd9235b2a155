//! Custom cargo commands for the typelit workspace.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask trace     - Rebuild with every macro expansion printed

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Environment variable the macros read to print their expansions.
const TRACE_ENV: &str = "TYPELIT_TRACE_EXPANSION";

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("trace") => trace()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + budget + tests + clippy + no-default-features)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  trace     Rebuild typelit with {} set and show each expansion
"#,
        TRACE_ENV
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("typelit Verification Suite");
    println!("==========================================\n");

    // Step 1: Check invariant markers
    println!("[1/5] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    // Step 2: The contracts must reach the top of the counter domain
    println!("[2/5] Checking counter budget coverage...");
    verify_budget()?;
    println!("✓ Contracts cover the last counter value\n");

    // Step 3: Run tests
    println!("[3/5] Running Rust tests...");
    run_cargo(&["test", "--workspace", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    // Step 4: Clippy
    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--workspace", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    // Step 5: Type layer on its own
    println!("[5/5] Building without the macros feature...");
    run_cargo(&["check", "-p", "typelit", "--no-default-features", "--quiet"])?;
    println!("✓ Type layer builds alone\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test", "--workspace"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--workspace"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--workspace", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--workspace", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Rebuild the root crate so its own macro calls expand again, with tracing on.
fn trace() -> Result<()> {
    run_cargo(&["clean", "-p", "typelit"])?;

    let root = project_root()?;
    let status = Command::new("cargo")
        .args(["build", "-p", "typelit"])
        .env(TRACE_ENV, "1")
        .current_dir(&root)
        .status()
        .context("Failed to run cargo build")?;

    if !status.success() {
        bail!("cargo build failed with {} set", TRACE_ENV);
    }

    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed contract checks!",
            count
        );
    }

    Ok(())
}

/// The union contracts must exercise the largest value the counter can reach,
/// so shrinking the budget breaks the build instead of silently narrowing the domain.
fn verify_budget() -> Result<()> {
    let root = project_root()?;

    let error_rs = std::fs::read_to_string(root.join("macros/src/error.rs"))
        .context("Failed to read macros/src/error.rs")?;
    let budget = extract_budget(&error_rs).context("COUNTER_BUDGET not found in error.rs")?;
    if budget == 0 {
        bail!("COUNTER_BUDGET must be at least 1");
    }
    let top = budget - 1;

    let contracts_rs = std::fs::read_to_string(root.join("src/contracts.rs"))
        .context("Failed to read src/contracts.rs")?;
    let covered = contracts_rs
        .lines()
        .filter(|line| line.contains("union_max!"))
        .any(|line| mentions_number(line, top));

    if !covered {
        bail!(
            "COUNTER_BUDGET is {} but no union_max! contract uses the top value {}",
            budget,
            top
        );
    }

    Ok(())
}

fn extract_budget(content: &str) -> Option<usize> {
    // Look for "pub const COUNTER_BUDGET: usize = 1000;"
    let line = content
        .lines()
        .find(|line| line.contains("const COUNTER_BUDGET"))?;
    let value = line.split('=').nth(1)?;
    value
        .trim()
        .trim_end_matches(';')
        .trim()
        .replace('_', "")
        .parse()
        .ok()
}

fn mentions_number(line: &str, n: usize) -> bool {
    let n = n.to_string();
    line.split(|c: char| !c.is_ascii_digit())
        .any(|token| token == n)
}
