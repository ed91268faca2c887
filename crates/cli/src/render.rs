//! Tab-separated table output for report queries.

use std::io::{self, Write};

use domain::tabular::Tabular;

/// Prints one header line of column names, then one line per row, in
/// result-set order. An empty result prints nothing.
pub fn print_table<T: Tabular, W: Write>(out: &mut W, rows: &[T]) -> io::Result<()> {
    if rows.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", T::columns().join("\t"))?;
    for row in rows {
        writeln!(out, "{}", row.cells().join("\t"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use persistence::entities::{CountRow, RoomEntity};

    #[test]
    fn test_header_then_rows() {
        let rooms = vec![
            RoomEntity {
                hotel_id: 1,
                room_no: 101,
                room_type: "Suite".to_string(),
            },
            RoomEntity {
                hotel_id: 1,
                room_no: 102,
                room_type: "Double".to_string(),
            },
        ];

        let mut out = Vec::new();
        print_table(&mut out, &rooms).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "hotelid\troomno\troomtype\n1\t101\tSuite\n1\t102\tDouble\n"
        );
    }

    #[test]
    fn test_empty_result_prints_nothing() {
        let mut out = Vec::new();
        print_table::<RoomEntity, _>(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_count_row() {
        let mut out = Vec::new();
        print_table(&mut out, &[CountRow { count: 3 }]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "count\n3\n");
    }
}
