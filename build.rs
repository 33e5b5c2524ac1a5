use std::env;

fn main() {
    // Build-time station configuration. These identify the cellular access
    // point and the report sink; they are fixed strings baked into the
    // firmware image. An empty value makes the configuration non-startable
    // (StationConfig::from_build_env rejects it before the loop runs).

    // Cellular access point name (APN)
    if let Ok(apn) = env::var("STATION_APN") {
        println!("cargo:rustc-env=STATION_APN={}", apn);
        println!("cargo:warning=Using STATION_APN from environment: {}", apn);
    } else {
        println!("cargo:rustc-env=STATION_APN=");
    }

    // Report sink host name or IP address
    if let Ok(server) = env::var("STATION_SERVER") {
        println!("cargo:rustc-env=STATION_SERVER={}", server);
        println!(
            "cargo:warning=Using STATION_SERVER from environment: {}",
            server
        );
    } else {
        println!("cargo:rustc-env=STATION_SERVER=");
    }

    // Report sink UDP port
    if let Ok(port) = env::var("STATION_PORT") {
        println!("cargo:rustc-env=STATION_PORT={}", port);
        println!("cargo:warning=Using STATION_PORT from environment: {}", port);
    } else {
        println!("cargo:rustc-env=STATION_PORT=");
    }

    // Rerun if environment variables change
    println!("cargo:rerun-if-env-changed=STATION_APN");
    println!("cargo:rerun-if-env-changed=STATION_SERVER");
    println!("cargo:rerun-if-env-changed=STATION_PORT");
}
