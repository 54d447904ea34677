use crate::cli::{ConstantsArgs, Precision};
use crate::error::Result;
use molcore::constants::*;
use molcore::Scalar;
use std::io::Write;
use tracing::info;

struct ConstantRow {
    name: &'static str,
    double: f64,
    single: f32,
    scalar: Scalar,
}

const TABLE: [ConstantRow; 5] = [
    ConstantRow {
        name: "PI",
        double: PI_D,
        single: PI_F,
        scalar: PI,
    },
    ConstantRow {
        name: "DEG_TO_RAD",
        double: DEG_TO_RAD_D,
        single: DEG_TO_RAD_F,
        scalar: DEG_TO_RAD,
    },
    ConstantRow {
        name: "RAD_TO_DEG",
        double: RAD_TO_DEG_D,
        single: RAD_TO_DEG_F,
        scalar: RAD_TO_DEG,
    },
    ConstantRow {
        name: "BOHR_TO_ANGSTROM",
        double: BOHR_TO_ANGSTROM_D,
        single: BOHR_TO_ANGSTROM_F,
        scalar: BOHR_TO_ANGSTROM,
    },
    ConstantRow {
        name: "ANGSTROM_TO_BOHR",
        double: ANGSTROM_TO_BOHR_D,
        single: ANGSTROM_TO_BOHR_F,
        scalar: ANGSTROM_TO_BOHR,
    },
];

pub fn run(args: ConstantsArgs, out: &mut impl Write) -> Result<()> {
    info!("Printing constant table ({:?} precision).", args.precision);
    write_table(args.precision, out)
}

fn write_table(precision: Precision, out: &mut impl Write) -> Result<()> {
    let scalar_bits = std::mem::size_of::<Scalar>() * 8;
    match precision {
        Precision::All => {
            writeln!(
                out,
                "{:<18} {:>22} {:>14} {:>22}",
                "NAME",
                "DOUBLE (_D)",
                "SINGLE (_F)",
                format!("SCALAR (f{})", scalar_bits)
            )?;
            for row in &TABLE {
                writeln!(
                    out,
                    "{:<18} {:>22} {:>14} {:>22}",
                    row.name, row.double, row.single, row.scalar
                )?;
            }
        }
        Precision::Double => {
            for row in &TABLE {
                writeln!(out, "{}_D = {}", row.name, row.double)?;
            }
        }
        Precision::Single => {
            for row in &TABLE {
                writeln!(out, "{}_F = {}", row.name, row.single)?;
            }
        }
        Precision::Scalar => {
            for row in &TABLE {
                writeln!(out, "{} = {} (f{})", row.name, row.scalar, scalar_bits)?;
            }
        }
    }
    Ok(())
}
