use crate::cli::ConvertArgs;
use crate::error::Result;
use molcore::units::convert_length;
use std::io::Write;
use tracing::info;

pub fn run(args: ConvertArgs, out: &mut impl Write) -> Result<()> {
    info!("Converting {} from {} to {}.", args.value, args.from, args.to);
    let converted = convert_length(args.value, args.from, args.to);
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

#[cfg(test)]
mod tests {
    use super::*;
    use molcore::{LengthUnit, Scalar};

    fn render(value: Scalar, from: LengthUnit, to: LengthUnit) -> String {
        let mut buf = Vec::new();
        let args = ConvertArgs { value, from, to };
        run(args, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn one_bohr_prints_bohr_radius_in_angstrom() {
        let output = render(1.0, LengthUnit::Bohr, LengthUnit::Angstrom);
        assert!(output.starts_with("1 a0 = 0.529177"));
        assert!(output.trim_end().ends_with("Å"));
    }

    #[test]
    fn identity_conversion_prints_input_value() {
        let output = render(2.5, LengthUnit::Angstrom, LengthUnit::Angstrom);
        assert_eq!(output, "2.5 Å = 2.5 Å\n");
    }
}
