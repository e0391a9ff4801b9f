//! Headless contact-matrix binary: loads atoms, computes the contact map and writes a heatmap image.

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use contact_matrix::engine::ContactMapEngine;
use contact_matrix::input::PointerEvent;
use contact_matrix::options::Options;
use contact_matrix::raster::HeatmapImage;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const USAGE: &str = "Usage: contact-matrix [ATOMS.json] [--threshold T] \
                     [--options FILE.toml] [--out FILE.ppm] [--drag X0 X1]";

/// CA–CA spacing of the generated demo chain.
const DEMO_BOND_LENGTH: f32 = 3.8;
const DEMO_ATOMS: usize = 200;

#[derive(Default)]
struct Args {
    atoms: Option<PathBuf>,
    threshold: Option<f32>,
    options: Option<PathBuf>,
    out: Option<PathBuf>,
    drag: Option<(f32, f32)>,
}

fn parse_number(flag: &str, value: Option<String>) -> Result<f32, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .map_err(|e| format!("invalid value for {flag} ({value}): {e}"))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--threshold" => {
                parsed.threshold = Some(parse_number(&arg, args.next())?);
            }
            "--options" => {
                parsed.options = Some(
                    args.next()
                        .ok_or("--options needs a path")?
                        .into(),
                );
            }
            "--out" => {
                parsed.out =
                    Some(args.next().ok_or("--out needs a path")?.into());
            }
            "--drag" => {
                let x0 = parse_number(&arg, args.next())?;
                let x1 = parse_number(&arg, args.next())?;
                parsed.drag = Some((x0, x1));
            }
            flag if flag.starts_with("--") => {
                return Err(format!("unknown flag {flag}"));
            }
            _ if parsed.atoms.is_none() => {
                parsed.atoms = Some(PathBuf::from(&arg));
            }
            _ => return Err(format!("unexpected argument {arg}")),
        }
    }
    Ok(parsed)
}

/// Read a JSON array of `[x, y, z]` triples.
fn read_atoms(path: &Path) -> Result<Vec<Vec3>, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let triples: Vec<[f32; 3]> = serde_json::from_str(&content)
        .map_err(|e| format!("failed to parse {}: {e}", path.display()))?;
    Ok(triples.into_iter().map(Vec3::from_array).collect())
}

/// Seeded random walk with fixed step length, a stand-in CA trace.
fn demo_chain(n: usize, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos = Vec3::ZERO;
    let mut atoms = Vec::with_capacity(n);
    for _ in 0..n {
        atoms.push(pos);
        let dir = Vec3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        )
        .try_normalize()
        .unwrap_or(Vec3::X);
        pos += dir * DEMO_BOND_LENGTH;
    }
    atoms
}

/// Binary PPM (P6); alpha is dropped.
fn write_ppm(path: &Path, image: &HeatmapImage) -> Result<(), String> {
    let n = image.size();
    let mut bytes = format!("P6\n{n} {n}\n255\n").into_bytes();
    bytes.reserve(n * n * 3);
    for px in image.pixels() {
        bytes.extend_from_slice(&px[..3]);
    }
    std::fs::write(path, bytes)
        .map_err(|e| format!("failed to write {}: {e}", path.display()))
}

fn run(args: &Args) -> Result<(), String> {
    let mut options = match &args.options {
        Some(path) => Options::load(path).map_err(|e| e.to_string())?,
        None => Options::default(),
    };
    if let Some(threshold) = args.threshold {
        options.contact.threshold = threshold;
    }

    let atoms = match &args.atoms {
        Some(path) => read_atoms(path)?,
        None => {
            log::info!("no atom file given, using a {DEMO_ATOMS}-atom demo chain");
            demo_chain(DEMO_ATOMS, 7)
        }
    };

    let mut engine = ContactMapEngine::new(options);
    engine.load_atoms(atoms).map_err(|e| e.to_string())?;

    let threshold = engine.threshold();
    let matrix = engine.matrix();
    log::info!(
        "{} atoms, {} contacts below {threshold} Å (density {:.3})",
        matrix.size(),
        matrix.count_contacts(threshold),
        matrix.contact_density(threshold)
    );

    if let Some((x0, x1)) = args.drag {
        let selected = Rc::new(Cell::new(None));
        let sink = Rc::clone(&selected);
        engine.set_on_range_selected(move |range| sink.set(Some(range)));
        let _ = engine.handle_pointer(PointerEvent::Down { x: x0, y: 0.5 });
        let _ = engine.handle_pointer(PointerEvent::Move { x: x1, y: 0.5 });
        let _ = engine.handle_pointer(PointerEvent::Up { x: x1, y: 0.5 });
        match selected.get() {
            Some([start, end]) => {
                log::info!("range selected: [{start}, {end}]");
            }
            None => log::info!(
                "gesture did not select a range: {:?}",
                engine.selection()
            ),
        }
    }

    if let Some(out) = &args.out {
        let image = engine.composite().flatten();
        write_ppm(out, &image)?;
        log::info!("wrote {}", out.display());
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            log::error!("{USAGE}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
