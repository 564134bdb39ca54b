//! Fixed-column text frames
//!
//! One particle per line, whitespace separated:
//!
//! ```text
//! # i   pos_x        pos_y        vel_x        vel_y        mass
//!  0   0.09762701   0.43037873   0.00000000   0.00000000   1.40090250
//! ```
//!
//! The full debug file appends `acc_x acc_y`, the acceleration file holds
//! only `i acc_x acc_y`. Blank lines and lines starting with `#` are skipped
//! on read; columns past the sixth are ignored.
//!
//! State columns use 8 decimals and accelerations 10, both sign-aligned
//! (leading space for non-negative values). Downstream tooling diffs these
//! files as text, so the layout is part of the golden output.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::simulation::states::{AccelerationField, NVec2, Particle, ParticleTable};

pub const FRAME_HEADER: &str = "# i   pos_x        pos_y        vel_x        vel_y        mass";
pub const ACC_HEADER: &str = "# i   acc_x        acc_y";
pub const FULL_HEADER: &str =
    "# i   pos_x        pos_y        vel_x        vel_y        mass        acc_x        acc_y";

/// Decimals for position, velocity and mass columns
pub const STATE_PRECISION: usize = 8;
/// Decimals for acceleration columns
pub const ACC_PRECISION: usize = 10;

const MIN_COLUMNS: usize = 6;

/// Fixed-precision number with a reserved sign column
pub fn fmt_signed(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return " nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { " inf".to_string() } else { "-inf".to_string() };
    }
    if value.is_sign_negative() {
        format!("{:.*}", precision, value)
    } else {
        format!(" {:.*}", precision, value)
    }
}

fn push_state(line: &mut String, p: &Particle) {
    let cols = [p.x.x, p.x.y, p.v.x, p.v.y, p.m];
    for (k, c) in cols.iter().enumerate() {
        if k > 0 {
            line.push_str("  ");
        }
        line.push_str(&fmt_signed(*c, STATE_PRECISION));
    }
}

fn push_acc(line: &mut String, a: &NVec2) {
    line.push_str(&fmt_signed(a.x, ACC_PRECISION));
    line.push_str("  ");
    line.push_str(&fmt_signed(a.y, ACC_PRECISION));
}

/// Render a frame (`i pos_x pos_y vel_x vel_y mass`) including its header
pub fn render_frame(table: &ParticleTable) -> String {
    let mut out = String::with_capacity(64 * (table.len() + 1));
    out.push_str(FRAME_HEADER);
    out.push('\n');
    for (i, p) in table.iter().enumerate() {
        out.push_str(&format!("{i:2}  "));
        push_state(&mut out, p);
        out.push('\n');
    }
    out
}

/// Render the acceleration-only file (`i acc_x acc_y`)
pub fn render_accelerations(field: &AccelerationField) -> String {
    let mut out = String::with_capacity(32 * (field.len() + 1));
    out.push_str(ACC_HEADER);
    out.push('\n');
    for (i, a) in field.iter().enumerate() {
        out.push_str(&format!("{i:2}  "));
        push_acc(&mut out, a);
        out.push('\n');
    }
    out
}

/// Render the debug file: frame columns followed by the accelerations
pub fn render_full(table: &ParticleTable, field: &AccelerationField) -> String {
    assert_eq!(
        table.len(),
        field.len(),
        "acceleration field does not match particle table"
    );

    let mut out = String::with_capacity(96 * (table.len() + 1));
    out.push_str(FULL_HEADER);
    out.push('\n');
    for (i, (p, a)) in table.iter().zip(field.iter()).enumerate() {
        out.push_str(&format!("{i:2}  "));
        push_state(&mut out, p);
        out.push_str("  ");
        push_acc(&mut out, a);
        out.push('\n');
    }
    out
}

fn parse_number(field: &str, name: &str, line_no: usize) -> Result<f64> {
    field
        .parse::<f64>()
        .with_context(|| format!("line {line_no}: bad {name} value {field:?}"))
}

/// Parse frame text. Row order in the text is the particle index.
pub fn parse_frame(text: &str) -> Result<ParticleTable> {
    let mut particles = Vec::new();

    for (k, raw) in text.lines().enumerate() {
        let line_no = k + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < MIN_COLUMNS {
            bail!("line {line_no}: bad line (need {MIN_COLUMNS} columns): {line}");
        }

        // the stored index must be an integer but is otherwise unused
        parts[0]
            .parse::<i64>()
            .with_context(|| format!("line {line_no}: bad index {:?}", parts[0]))?;

        let x = parse_number(parts[1], "pos_x", line_no)?;
        let y = parse_number(parts[2], "pos_y", line_no)?;
        let vx = parse_number(parts[3], "vel_x", line_no)?;
        let vy = parse_number(parts[4], "vel_y", line_no)?;
        let m = parse_number(parts[5], "mass", line_no)?;

        particles.push(Particle::new(NVec2::new(x, y), NVec2::new(vx, vy), m));
    }

    Ok(ParticleTable::new(particles))
}

/// Load a frame file
pub fn read_frame(path: &Path) -> Result<ParticleTable> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read frame {}", path.display()))?;
    parse_frame(&text).with_context(|| format!("malformed frame {}", path.display()))
}

/// Write already-rendered text to `path` in one call
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
}

pub fn write_frame(path: &Path, table: &ParticleTable) -> Result<()> {
    write_text(path, &render_frame(table))
}
