use std::env;
use std::path::PathBuf;

// ffmpeg-sys-next needs FFMPEG_DIR (or pkg-config) to locate the FFmpeg
// libraries. On Windows the common route is vcpkg, so emit hints when the
// relevant variables are missing or inconsistent.
fn main() {
    for var in ["FFMPEG_DIR", "VCPKG_ROOT", "VCPKGRS_DYNAMIC", "VCPKGRS_TRIPLET"] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows"
        || env::var_os("FFMPEG_DIR").is_some()
    {
        return;
    }

    let Ok(vcpkg_root) = env::var("VCPKG_ROOT") else {
        println!(
            "cargo:warning=FFMPEG_DIR is not set. On Windows, install FFmpeg via vcpkg and set VCPKG_ROOT + FFMPEG_DIR so ffmpeg-sys-next can find it."
        );
        return;
    };

    let triplet = env::var("VCPKGRS_TRIPLET").unwrap_or_else(|_| "x64-windows".to_string());
    let ffmpeg_dir = PathBuf::from(&vcpkg_root).join("installed").join(&triplet);

    if !ffmpeg_dir.exists() {
        println!(
            "cargo:warning=VCPKG_ROOT is set but no FFmpeg install was found at {}.",
            ffmpeg_dir.display(),
        );
        return;
    }

    println!(
        "cargo:warning=Detected vcpkg FFmpeg at {}. Set FFMPEG_DIR={} to make discovery explicit.",
        ffmpeg_dir.display(),
        ffmpeg_dir.display(),
    );
    if env::var_os("VCPKGRS_DYNAMIC").is_none() {
        println!(
            "cargo:warning=Consider setting VCPKGRS_DYNAMIC=1 when linking against vcpkg dynamic FFmpeg builds."
        );
    }
}
