use indexmap::IndexMap;

/// Append ` ORDER BY c1 d1, c2 d2` in insertion order. Nothing is written for an empty map.
///
/// Column names and directions are copied verbatim and must not come from untrusted input.
pub fn append_order_by(sql: &mut String, sorts: &IndexMap<String, String>) {
    if sorts.is_empty() {
        return;
    }
    sql.push_str(" ORDER BY ");
    for (i, (column, direction)) in sorts.iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push_str(column);
        sql.push(' ');
        sql.push_str(direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sorts_leave_sql_alone() {
        let mut sql = String::from("select 1");
        append_order_by(&mut sql, &IndexMap::new());
        assert_eq!(sql, "select 1");
    }

    #[test]
    fn renders_in_insertion_order() {
        let mut sorts = IndexMap::new();
        sorts.insert("last_name".to_string(), "ASC".to_string());
        sorts.insert("id".to_string(), "DESC".to_string());
        let mut sql = String::from("select * from people");
        append_order_by(&mut sql, &sorts);
        assert_eq!(sql, "select * from people ORDER BY last_name ASC, id DESC");
    }
}
