use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let git_hash = command_output("git", &["rev-parse", "--short", "HEAD"])
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".to_string());
    let git_status = command_output("git", &["status", "--porcelain"])
        .map(|status| if status.is_empty() { "clean" } else { "dirty" })
        .unwrap_or("unknown");
    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let rustc = command_output("rustc", &["--version"]).unwrap_or_else(|| "unknown".to_string());

    emit("HASH", &git_hash);
    emit("STATUS", git_status);
    emit("TIMESTAMP", &timestamp);
    emit("TARGET", &env::var("TARGET").unwrap_or_else(|_| "unknown-target".into()));
    emit("PROFILE", &env::var("PROFILE").unwrap_or_else(|_| "unknown-profile".into()));
    emit("RUSTC", &rustc);
}

fn emit(key: &str, value: &str) {
    println!("cargo:rustc-env=FINTRACK_BUILD_{key}={value}");
}

/// Trimmed stdout of a successful command, `None` if it could not run.
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|text| text.trim().to_string())
}
