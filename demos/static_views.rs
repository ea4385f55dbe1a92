//! Static multi-view demo
//!
//! The non-interactive path: build the demo letter, apply a fixed
//! scale -> translate -> rotate sequence through the model, print the
//! composed transform, and draw the three orthographic views.

use std::f32::consts::FRAC_PI_4;

use wire3d::config::RenderConfig;
use wire3d::scene;
use wire3d::systems::render::render_view;
use wire3d_core::all_views;
use wire3d_math::{mat4, Mat4};

fn main() {
    env_logger::init();

    let mut model = scene::letter_p();
    log::info!(
        "Demo model: {} points, {} edges",
        model.point_count(),
        model.edge_count()
    );

    // Apply the transforms one at a time, as the interactive viewer
    // would, keeping each returned matrix for the composition below.
    let scale = model.transform(mat4::scaling(1.5, 1.5, 1.5));
    let shift = model.transform(mat4::translation(1.0, 1.0, 0.0));
    let rotate = model.transform(mat4::rotation_z(FRAC_PI_4));

    let composed = mat4::mul(rotate, mat4::mul(shift, scale));
    println!("Composed transform:");
    print_matrix(composed);

    let render_config = RenderConfig::default();
    for view in all_views(model.points(), model.edges()) {
        print!("{}", render_view(&view, &render_config));
        println!();
    }
}

/// Print a matrix row by row (it is stored column-major)
fn print_matrix(m: Mat4) {
    for row in 0..4 {
        println!(
            "  [{:8.4} {:8.4} {:8.4} {:8.4}]",
            m[0][row], m[1][row], m[2][row], m[3][row]
        );
    }
}
