use crate::cli::AngleArgs;
use crate::error::Result;
use molcore::units::convert_angle;
use std::io::Write;
use tracing::info;

pub fn run(args: AngleArgs, out: &mut impl Write) -> Result<()> {
    info!("Converting {} from {} to {}.", args.value, args.from, args.to);
    let converted = convert_angle(args.value, args.from, args.to);
    writeln!(
        out,
        "{} {} = {} {}",
        args.value,
        args.from.symbol(),
        converted,
        args.to.symbol()
    )?;
    Ok(())
}
