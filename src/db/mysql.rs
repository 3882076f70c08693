use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlRow};
use sqlx::{ConnectOptions, Row};

use crate::db::models::Employee;
use crate::error::DirectoryError;

const INSERT_EMPLOYEE: &str = "INSERT INTO employee VALUES (?, ?, ?, ?, ?)";
const SELECT_EMPLOYEE: &str = "SELECT emp_id, first_name, last_name, primary_skill, location \
     FROM employee WHERE emp_id = ?";

/// Gateway to the pre-existing `employee` table.
///
/// There is no pool: every operation runs on a connection opened by
/// [`EmployeeStore::connect`] and closed by the caller afterwards. The
/// store itself only holds the connect options.
#[derive(Debug, Clone)]
pub struct EmployeeStore {
    options: MySqlConnectOptions,
}

impl EmployeeStore {
    pub fn new(options: MySqlConnectOptions) -> Self {
        Self { options }
    }

    /// Open a fresh connection for one request.
    ///
    /// Connect failures come back as [`DirectoryError::Connect`] so callers
    /// can short-circuit to the error page.
    pub async fn connect(&self) -> Result<MySqlConnection, DirectoryError> {
        self.options
            .connect()
            .await
            .map_err(DirectoryError::Connect)
    }

    /// Five-column positional insert. Uniqueness of `emp_id` is whatever
    /// the table schema enforces.
    pub async fn insert(
        &self,
        conn: &mut MySqlConnection,
        employee: &Employee,
    ) -> Result<(), DirectoryError> {
        sqlx::query(INSERT_EMPLOYEE)
            .bind(&employee.emp_id)
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.primary_skill)
            .bind(&employee.location)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    /// Select by identifier, first row only. Zero rows is `None`, not an
    /// error.
    pub async fn lookup(
        &self,
        conn: &mut MySqlConnection,
        emp_id: &str,
    ) -> Result<Option<Employee>, DirectoryError> {
        let row = sqlx::query(SELECT_EMPLOYEE)
            .bind(emp_id)
            .fetch_optional(&mut *conn)
            .await?;
        row.map(row_to_employee).transpose()
    }
}

fn row_to_employee(row: MySqlRow) -> Result<Employee, DirectoryError> {
    Ok(Employee {
        emp_id: row.try_get(0)?,
        first_name: row.try_get(1)?,
        last_name: row.try_get(2)?,
        primary_skill: row.try_get(3)?,
        location: row.try_get(4)?,
    })
}
