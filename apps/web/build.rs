use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    // Baked in through option_env! by the config module.
    println!("cargo:rerun-if-env-changed=PAYFEE_API_BASE_URL");
    println!("cargo:rerun-if-env-changed=PAYFEE_SUBMIT_DELAY_MS");

    let sha = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=PAYFEE_WEB_GIT_SHA={sha}");
}
