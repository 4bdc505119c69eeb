//! Plain-text summary of a solved spectrum.
//!
//! Output looks like
//! ```text
//! Eigenvalues (Energy Levels):
//! E[0] = 4.934802200544679
//! E[1] = 19.739208802178716
//! ...
//!
//! Ground state wavefunction:
//! ψ[0] = 1
//! ψ[1] = 0
//! ...
//! ```
//! where the `ψ` lines are the ground state's coefficients in the box basis.
//! Both sections print at most [`ReportOptions::limit`] lines.

use std::io::{ self, Write };
use crate::{ config::ReportOptions, eigen::EigenResult };

/// Write the energy and ground-state summary of `res` to `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    res: &EigenResult,
    opts: &ReportOptions,
) -> io::Result<()>
{
    let psi = if opts.ascii { "psi" } else { "ψ" };
    writeln!(out, "Eigenvalues (Energy Levels):")?;
    for (i, e) in res.get_energies().iter().take(opts.limit).enumerate() {
        writeln!(out, "E[{}] = {}", i, e)?;
    }
    writeln!(out)?;
    writeln!(out, "Ground state wavefunction:")?;
    for (i, c) in res.state(0).iter().take(opts.limit).enumerate() {
        writeln!(out, "{}[{}] = {}", psi, i, c)?;
    }
    Ok(())
}

/// Like [`write_report`], but collect the output into a `String`.
pub fn report_string(res: &EigenResult, opts: &ReportOptions) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // writing into a Vec can't fail
    let _ = write_report(&mut buf, res, opts);
    String::from_utf8_lossy(&buf).into_owned()
}
