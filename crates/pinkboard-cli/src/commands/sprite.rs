//! Sprite command - writes the heart sprite to a PNG

use anyhow::{Context, Result};
use pinkboard_raster::{heart_sprite, parse_color};

pub struct SpriteArgs {
    pub size: u32,
    pub color: String,
    pub output: String,
}

pub fn run(args: SpriteArgs) -> Result<()> {
    let color = parse_color(&args.color)?;
    let sprite = heart_sprite(args.size, color).context("Failed to rasterize sprite")?;
    sprite.save_png(&args.output)?;
    println!("Saved {}x{} sprite to {}", args.size, args.size, args.output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("heart.png");
        run(SpriteArgs {
            size: 24,
            color: "#ea80b0".to_string(),
            output: output.to_string_lossy().into_owned(),
        })
        .unwrap();

        let img = image::open(&output).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (24, 24));
        assert!(img.pixels().any(|p| p[3] == 255));
    }

    #[test]
    fn bad_color_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(SpriteArgs {
            size: 24,
            color: "pink".to_string(),
            output: dir.path().join("x.png").to_string_lossy().into_owned(),
        });
        assert!(result.is_err());
    }
}
