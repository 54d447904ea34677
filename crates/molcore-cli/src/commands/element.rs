use crate::cli::ElementArgs;
use crate::error::Result;
use molcore::{AtomicIdentity, CUSTOM_ELEMENT_MIN};
use std::io::Write;
use tracing::{debug, info};

pub fn run(args: ElementArgs, out: &mut impl Write) -> Result<()> {
    info!("Classifying {} atomic number(s).", args.identities.len());
    for identity in args.identities {
        writeln!(out, "{}", describe(identity))?;
    }
    Ok(())
}

fn describe(identity: AtomicIdentity) -> String {
    let byte = identity.atomic_number();
    debug!(byte, %identity, "Classified atomic number");
    match AtomicIdentity::from_atomic_number(byte) {
        AtomicIdentity::Element(0) => format!("{:>3}  element (unset)", byte),
        AtomicIdentity::Element(n) => format!("{:>3}  element Z={}", byte, n),
        AtomicIdentity::Custom(offset) => format!(
            "{:>3}  custom particle #{} ({} + {})",
            byte, offset, CUSTOM_ELEMENT_MIN, offset
        ),
        AtomicIdentity::Invalid => format!("{:>3}  invalid", byte),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(identities: Vec<AtomicIdentity>) -> String {
        let mut buf = Vec::new();
        run(ElementArgs { identities }, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn describes_each_kind_of_atomic_number() {
        let output = render(vec![
            AtomicIdentity::from(6u8),
            AtomicIdentity::from(127u8),
            AtomicIdentity::from(128u8),
            AtomicIdentity::from(254u8),
            AtomicIdentity::from(255u8),
        ]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "  6  element Z=6",
                "127  element Z=127",
                "128  custom particle #0 (128 + 0)",
                "254  custom particle #126 (128 + 126)",
                "255  invalid",
            ]
        );
    }

    #[test]
    fn zero_is_reported_as_unset_element() {
        assert_eq!(render(vec![AtomicIdentity::from(0u8)]), "  0  element (unset)\n");
    }
}
