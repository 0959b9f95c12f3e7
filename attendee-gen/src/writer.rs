use std::io;
use std::path::Path;

use csv::WriterBuilder;
use log::info;

use crate::error::GenError;
use crate::ticket::TicketRecord;

/// Writes one headerless row per ticket, in the order given.
///
/// # Errors
/// Errors when a row cannot be written or the output cannot be flushed.
pub fn write_roster<W: io::Write>(tickets: &[TicketRecord], out: W) -> Result<(), GenError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);
    for ticket in tickets {
        writer.serialize(ticket)?;
    }
    writer.flush()?;
    Ok(())
}

/// # Errors
/// Errors when the file cannot be created or written.
pub fn write_roster_to_path(tickets: &[TicketRecord], path: &Path) -> Result<(), GenError> {
    let file = std::fs::File::create(path)?;
    write_roster(tickets, file)?;
    info!("Wrote {} tickets to {}", tickets.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_write_roster_no_header() {
        let tickets = vec![
            TicketRecord::unsold(1, 10, "Generator"),
            TicketRecord::unsold(2, 10, "Generator"),
        ];
        let mut out = Vec::new();
        write_roster(&tickets, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1,null,null,10,0,null,Generator,null\n2,null,null,10,0,null,Generator,null\n"
        );
    }

    #[test]
    fn test_write_roster_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attendees.csv");
        let tickets = vec![
            TicketRecord::unsold(1, 10, "Generator"),
            TicketRecord::unsold(1000, 10, "Generator"),
        ];
        write_roster_to_path(&tickets, &path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "1,null,null,10,0,null,Generator,null\n1000,null,null,0,0,null,Generator,null\n"
        );

        // an existing file is replaced, not appended to
        write_roster_to_path(&tickets[..1], &path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "1,null,null,10,0,null,Generator,null\n"
        );
    }

    #[test]
    fn test_write_roster_to_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("attendees.csv");
        let res = write_roster_to_path(&[], &path);
        assert!(matches!(res, Err(GenError::IoError(_))));
    }

    #[test]
    fn test_write_empty_roster() {
        let mut out = Vec::new();
        write_roster(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }
}
