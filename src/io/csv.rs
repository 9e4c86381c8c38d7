use std::io::{self, Write};

use crate::sim::Run;

/// Write a recorded run in CSV format.
///
/// Columns: tick, angle_deg, position, speed, correction, world_x, world_y, settled
pub fn write_trajectory<W: Write>(writer: &mut W, run: &Run) -> io::Result<()> {
    writeln!(writer, "tick,angle_deg,position,speed,correction,world_x,world_y,settled")?;

    for r in &run.trajectory {
        writeln!(
            writer,
            "{},{:.6},{:.6},{:.6e},{:.6e},{:.6},{:.6},{}",
            r.tick,
            r.angle.to_degrees(),
            r.position,
            r.speed,
            r.correction,
            r.world.x,
            r.world.y,
            u8::from(run.settled_at == Some(r.tick)),
        )?;
    }

    Ok(())
}

/// Write a recorded run to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, run: &Run) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, run)
}
