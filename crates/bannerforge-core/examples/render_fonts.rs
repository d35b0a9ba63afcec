//! Render a sample through every font style.
//!
//! Run with: cargo run --example render_fonts

use bannerforge_core::{BannerGenerator, FontStyle};

fn main() {
    let fonts_dir = format!("{}/../../fonts", env!("CARGO_MANIFEST_DIR"));
    let generator = BannerGenerator::new(&fonts_dir);

    println!("Bannerforge font sampler - {} styles\n", FontStyle::all().len());

    for style in FontStyle::all() {
        println!("--- {} ---", style.name());
        match generator.render("Banner", *style) {
            Ok(rendering) => {
                print!("{}", rendering.art);
                if rendering.has_unprintable {
                    println!("(input contained unprintable characters)");
                }
            }
            Err(e) => println!("error: {e}"),
        }
        println!();
    }
}
