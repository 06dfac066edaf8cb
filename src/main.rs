//! `mapcam` command-line tool: places a camera from latitude, longitude,
//! altitude and zoom, then logs its basis vectors and frame matrices.

use std::path::Path;

use mapcam::options::Options;
use mapcam::{Camera, FreeCameraOptions, LatLng};

const USAGE: &str = "Usage: mapcam <lat> <lng> <altitude_m> <zoom> \
                     [pitch_deg] [bearing_deg] [options.toml]";

/// Command-line placement of the camera.
struct Placement {
    location: LatLng,
    altitude: f64,
    zoom: f64,
    pitch: f64,
    bearing: f64,
    options_path: Option<String>,
}

fn parse_number(args: &[String], index: usize, name: &str) -> Result<f64, String> {
    args.get(index)
        .ok_or_else(|| format!("missing {name}"))?
        .parse()
        .map_err(|e| format!("invalid {name}: {e}"))
}

fn parse_args(args: &[String]) -> Result<Placement, String> {
    let optional = |index: usize, name: &str| {
        if args.len() > index {
            parse_number(args, index, name)
        } else {
            Ok(0.0)
        }
    };
    Ok(Placement {
        location: LatLng::new(
            parse_number(args, 0, "latitude")?,
            parse_number(args, 1, "longitude")?,
        ),
        altitude: parse_number(args, 2, "altitude")?,
        zoom: parse_number(args, 3, "zoom")?,
        pitch: optional(4, "pitch")?,
        bearing: optional(5, "bearing")?,
        options_path: args.get(6).cloned(),
    })
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let placement = match parse_args(&args) {
        Ok(placement) => placement,
        Err(e) => {
            log::error!("{e}");
            log::error!("{USAGE}");
            std::process::exit(1);
        }
    };

    let options = match placement.options_path.as_deref() {
        Some(path) => match Options::load(Path::new(path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("Failed to load options '{path}': {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let projection = options.projection.web_mercator();
    let mut free = FreeCameraOptions::with_projection(projection);
    free.set_location(placement.location, placement.altitude);
    free.set_pitch_bearing(placement.pitch, placement.bearing);

    let mut camera = Camera::with_projection(projection);
    camera.apply_free_camera_options(&free);

    let (pitch, bearing) = camera.pitch_bearing();
    log::info!(
        "camera at {:?} (mercator {:?}), pitch {:.3}° bearing {:.3}°",
        free.location(),
        camera.position(),
        pitch.to_degrees(),
        bearing.to_degrees()
    );
    log::info!(
        "basis forward {:?} right {:?} up {:?}",
        camera.forward(),
        camera.right(),
        camera.up()
    );

    let frame = camera.frame_matrices(placement.zoom, 16.0 / 9.0, &options.camera);
    log::info!("world_to_camera {:?}", frame.world_to_camera);
    log::info!("camera_to_world {:?}", frame.camera_to_world);
    log::info!("camera_to_clip {:?}", frame.camera_to_clip);
}
