//! Shared helpers for CLI integration tests.

#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

pub const ARTIST_PLATFORMS: &str = "\
Platform,Type,Keywords,Strengths,Limitations,Prompt Style,Key Parameters
Midjourney,Image,\"midjourney, mj, discord\",Artistic coherence,Text rendering,Short evocative phrases,--ar --stylize
Nano Banana,Image,\"nano banana, gemini, google\",Text rendering and editing,Fewer style presets,Natural language,aspect ratio
Flux,Image,\"flux, black forest\",Photorealism,Slow,Detailed descriptions,guidance
";

pub const ARTIST_STYLES: &str = "\
Style Name,Category,Keywords,Description,Best For,Prompt Keywords
Cyberpunk,Digital,\"neon, city, night\",High-tech low-life neon city,Posters,neon-lit rain
Watercolor,Painting,\"soft, wash, paper\",Translucent pigment washes,Illustration,watercolor wash
Anime,Illustration,\"anime, cel\",Cel shaded characters,Avatars,anime key visual
";

pub const ARTIST_LIGHTING: &str = "\
Lighting Type,Category,Keywords,Description,Mood,Best For,Prompt Keywords
Golden Hour,Natural,\"golden hour, sunset, warm\",Low warm sun,Nostalgic,Portraits,golden hour light
Rembrandt,Studio,\"rembrandt, triangle\",Triangle of light on the cheek,Dramatic,Portraits,rembrandt lighting
";

pub const THREEJS_EXAMPLES: &str = "\
ID,Category,Name,File,Keywords,URL,Complexity,Use Cases,Description
1,Animation,animation keyframes,animation_keyframes.html,\"keyframes, clip\",https://threejs.org/examples/#animation_keyframes,Low,Character motion,Keyframe tracks
2,Loaders,loader gltf,loader_gltf.html,\"gltf, model\",https://threejs.org/examples/#loader_gltf,Medium,Model viewer,Load glTF models
3,WebXR,webxr vr cubes,webxr_vr_cubes.html,\"vr, headset\",https://threejs.org/examples/#webxr_vr_cubes,High,VR experience,Cubes in VR
";

pub const THREEJS_USE_CASES: &str = "\
Use Case,Keywords,Recommended Examples,Complexity,Technologies,Description
Product Viewer,\"product, ecommerce, 360\",loader gltf; webxr vr cubes,Medium,glTF,Inspect products
";

/// Data root with a representative subset of both catalogs.
pub fn data_root() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "ai-artist/platforms.csv", ARTIST_PLATFORMS);
    write(dir.path(), "ai-artist/styles.csv", ARTIST_STYLES);
    write(dir.path(), "ai-artist/lighting.csv", ARTIST_LIGHTING);
    write(dir.path(), "threejs/examples-all.csv", THREEJS_EXAMPLES);
    write(dir.path(), "threejs/use-cases.csv", THREEJS_USE_CASES);
    dir
}

pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// `skillkb` isolated from the user's config and environment.
pub fn skillkb(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("skillkb").unwrap();
    cmd.env("SKB_CONFIG", root.join("config.toml"))
        .env_remove("SKB_DATA_DIR")
        .env_remove("SKB_ROBOT")
        .env_remove("SKB_BM25_K1")
        .env_remove("SKB_BM25_B")
        .env_remove("SKB_ARTIST_MAX_RESULTS")
        .env_remove("SKB_THREEJS_MAX_RESULTS")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(root);
    cmd
}

pub fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
