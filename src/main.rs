//! wire3d - Interactive 3D wireframe viewer
//!
//! Reads commands from stdin, applies them to the view state, and
//! redraws. The model is never mutated - every frame is recomputed from
//! the pristine snapshot, so `reset` is always exact.

use std::io::{self, BufRead, Write};

use wire3d::config::AppConfig;
use wire3d::input::{CommandMapper, ViewerAction};
use wire3d::scene;
use wire3d::systems::render::render_view;
use wire3d_core::{all_views, ModelValidator, PlaneProjection, ViewState, WireModel};

const HELP: &str = "\
Commands:
  shift DX DY DZ     move the model by a vector
  +x -x +y -y +z -z  nudge one step along an axis
  scale+ / scale-    grow / shrink by one step
  project xy|xz|yz   project onto a plane
  project off        back to the full 3D view
  reset              restore the original model
  show               print state and current points
  views              draw all three plane views
  help               this text
  quit               leave the viewer
";

/// Interactive session state: the model, its view, and the config
struct Viewer {
    model: WireModel,
    view: ViewState,
    config: AppConfig,
}

impl Viewer {
    fn new(model: WireModel, config: AppConfig) -> Self {
        let view = ViewState::new(model.points().to_vec());
        Self { model, view, config }
    }

    /// Apply one action; returns false when the session should end
    fn handle(&mut self, action: ViewerAction) -> bool {
        match action {
            ViewerAction::Shift(dx, dy, dz) => {
                self.view.apply_shift(dx, dy, dz);
                self.redraw();
            }
            ViewerAction::ScaleUp => {
                self.view.scale_up();
                self.redraw();
            }
            ViewerAction::ScaleDown => {
                self.view.scale_down();
                self.redraw();
            }
            ViewerAction::Project(plane) => {
                self.view.set_projection(plane);
                self.redraw();
            }
            ViewerAction::ClearProjection => {
                self.view.clear_projection();
                self.redraw();
            }
            ViewerAction::Reset => {
                self.view.reset();
                log::info!("View reset to original model");
                self.redraw();
            }
            ViewerAction::Show => {
                self.print_status();
                for (i, p) in self.view.current_points().iter().enumerate() {
                    println!("  {:2}: ({:7.3}, {:7.3}, {:7.3})", i, p.x, p.y, p.z);
                }
            }
            ViewerAction::Views => self.print_views(),
            ViewerAction::Help => print!("{}", HELP),
            ViewerAction::Quit => return false,
        }
        true
    }

    fn print_status(&self) {
        let shift = self.view.shift_total();
        let projection = match self.view.projection() {
            Some(plane) => plane.to_string(),
            None => "none".to_string(),
        };
        println!(
            "scale {:.4}  shift ({:.2}, {:.2}, {:.2})  projection {}",
            self.view.scale_factor(),
            shift.x,
            shift.y,
            shift.z,
            projection
        );
    }

    /// After a state change: the active plane view, or a status line
    fn redraw(&self) {
        self.print_status();
        if let Some(plane) = self.view.projection() {
            let points = self.view.current_points();
            let view = PlaneProjection::from_points(&points, self.model.edges(), plane);
            print!("{}", render_view(&view, &self.config.render));
        }
    }

    fn print_views(&self) {
        let points = self.view.current_points();
        for view in all_views(&points, self.model.edges()) {
            print!("{}", render_view(&view, &self.config.render));
        }
    }
}

fn main() {
    // Load configuration, then bring up logging with its level
    let (config, config_err) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.clone()),
    )
    .init();
    if let Some(e) = config_err {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    log::info!("Starting wire3d viewer");

    let model = scene::letter_p();
    for error in ModelValidator::validate(&model) {
        log::warn!("Model check: {}", error);
    }
    log::info!(
        "Loaded demo model with {} points and {} edges",
        model.point_count(),
        model.edge_count()
    );

    let shift_step = config.viewer.shift_step;
    let mut viewer = Viewer::new(model, config);

    print!("{}", HELP);
    prompt();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("Failed to read input: {}", e);
                break;
            }
        };

        match CommandMapper::map_line(&line, shift_step) {
            Ok(Some(action)) => {
                if !viewer.handle(action) {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => println!("error: {}", e),
        }
        prompt();
    }

    log::info!("Leaving wire3d viewer");
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
