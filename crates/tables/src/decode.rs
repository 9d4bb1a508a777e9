use serde::de::DeserializeOwned;

/// Decode every row of a headed CSV stream into `T`.
///
/// Columns are matched by header name, so extra columns are ignored and
/// column order does not matter. Whitespace around fields is trimmed.
pub fn decode<T, R>(reader: R) -> anyhow::Result<Vec<T>>
where
    T: DeserializeOwned,
    R: std::io::Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    reader
        .deserialize::<T>()
        .map(|row| row.map_err(|e| anyhow::anyhow!("decode row: {}", e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Name;
    use crate::Share;
    use crate::Strategy;
    use ttev_labels::Action;
    use ttev_labels::Spin;

    #[test]
    fn strategies_with_spin() {
        let csv = "\
A1_actionId,A1_spinId,C_actionId,C_spinId,EV,usage_rate,count
1,1,13,2,0.612,0.25,40
1,1,2,1,0.701,0.20,32
";
        let rows = decode::<Strategy, _>(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].first, Action::Drive);
        assert_eq!(rows[0].first_spin, Some(Spin::Top));
        assert_eq!(rows[0].reply, Action::Block);
        assert_eq!(rows[0].reply_spin, Some(Spin::Back));
        assert_eq!(rows[0].ev, 0.612);
        assert_eq!(rows[0].usage, 0.25);
        assert_eq!(rows[0].count, 40);
    }

    #[test]
    fn strategies_without_spin_columns() {
        let csv = "\
A1_actionId,C_actionId,EV,usage_rate,count
15,10,0.571,0.42,84
";
        let rows = decode::<Strategy, _>(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].first, Action::Traditional);
        assert_eq!(rows[0].first_spin, None);
        assert_eq!(rows[0].reply_spin, None);
    }

    #[test]
    fn float_encoded_codes_and_extra_columns() {
        let csv = "\
index,A1_actionId,A1_spinId,C_actionId,C_spinId,EV,usage_rate,count
0,1.0,2.0,10.0,,0.455,0.6,30
";
        let rows = decode::<Strategy, _>(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].first_spin, Some(Spin::Back));
        assert_eq!(rows[0].reply, Action::Rub);
        assert_eq!(rows[0].reply_spin, None);
    }

    #[test]
    fn rejects_unknown_codes() {
        let csv = "\
A1_actionId,C_actionId,EV,usage_rate,count
19,10,0.5,0.5,1
";
        assert!(decode::<Strategy, _>(csv.as_bytes()).is_err());
    }

    #[test]
    fn shares_and_names() {
        let csv = "\
A1_playerId,A1_actionId,C_actionId,use_count,usage_share,win_rate
101,15,10,30,0.36,0.6
";
        let shares = decode::<Share, _>(csv.as_bytes()).unwrap();
        assert_eq!(shares[0].player, 101);
        assert_eq!(shares[0].uses, 30);
        assert_eq!(shares[0].wins, 0.6);
        let csv = "player_id,player_name\n101, Lin \n";
        let names = decode::<Name, _>(csv.as_bytes()).unwrap();
        assert_eq!(names[0].name, "Lin");
    }
}
