use std::path::Path;

use log::info;
use rusqlite::{Connection, Params, Row};

pub struct Storage {
    connection: Connection,
}

impl Storage {
    pub fn open<P: AsRef<Path>>(path: P) -> rusqlite::Result<Self> {
        let path = path.as_ref();
        info!("Open knowledge storage {:?}", path);
        Connection::open(path).map(|connection| Storage { connection })
    }

    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Connection::open_in_memory().map(|connection| Storage { connection })
    }

    #[inline]
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn execute(&self, sql: &str) -> rusqlite::Result<()> {
        self.connection.execute_batch(sql)
    }

    pub fn has_table<T>(&self) -> rusqlite::Result<bool> {
        let mut statement = self
            .connection
            .prepare("select count(*) from sqlite_master where type = 'table' and name = ?")?;
        let count: usize = statement.query_row([table_name::<T>()], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Maps every row of the table named after `T`.
    pub fn find_all<T, E, M>(&self, map: M) -> Result<Vec<T>, E>
    where
        M: FnMut(&Row) -> Result<T, E>,
        E: From<rusqlite::Error>,
    {
        self.query_map::<T, E, _, M>([], "", map)
    }

    pub fn find_one<T, E, M>(&self, name: &str, map: M) -> Result<Option<T>, E>
    where
        M: FnMut(&Row) -> Result<T, E>,
        E: From<rusqlite::Error>,
    {
        let mut values = self.query_map::<T, E, _, M>([name], "where name = ?", map)?;
        Ok(if values.is_empty() {
            None
        } else {
            Some(values.remove(0))
        })
    }

    fn query_map<T, E, P: Params, M>(
        &self,
        params: P,
        where_clause: &str,
        mut map: M,
    ) -> Result<Vec<T>, E>
    where
        M: FnMut(&Row) -> Result<T, E>,
        E: From<rusqlite::Error>,
    {
        let table = table_name::<T>();
        let mut statement = self
            .connection
            .prepare(&format!("select * from {} {}", table, where_clause))?;
        let mut rows = statement.query(params)?;
        let mut values = vec![];
        while let Some(row) = rows.next()? {
            values.push(map(row)?);
        }
        Ok(values)
    }
}

pub fn table_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}
