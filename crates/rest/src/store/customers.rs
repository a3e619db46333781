//! Customer record statements.

use serde::Serialize;
use strata_tenancy::pool::TenantConnection;

/// One customer record as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerRecord {
    /// The owning tenant's identity.
    pub tenant_id: String,
    /// The customer name.
    pub name: String,
}

/// Returns all customer records visible to the connection's tenant,
/// ordered by name.
pub async fn list(conn: &TenantConnection) -> Result<Vec<CustomerRecord>, tokio_postgres::Error> {
    let rows = conn
        .query("SELECT tenant_id, name FROM customers ORDER BY name", &[])
        .await?;

    Ok(rows
        .iter()
        .map(|row| CustomerRecord {
            tenant_id: row.get(0),
            name: row.get(1),
        })
        .collect())
}

/// Creates a customer record for the connection's tenant.
///
/// The tenant column is stamped from the connection's own identity,
/// never from request data, so a record can only ever be created inside
/// the authenticated tenant's boundary.
pub async fn create(
    conn: &TenantConnection,
    name: &str,
) -> Result<CustomerRecord, tokio_postgres::Error> {
    let tenant_id = conn.tenant_id().as_str();
    conn.execute(
        "INSERT INTO customers (tenant_id, name) VALUES ($1, $2)",
        &[&tenant_id, &name],
    )
    .await?;

    Ok(CustomerRecord {
        tenant_id: tenant_id.to_string(),
        name: name.to_string(),
    })
}

/// Renames a customer record, returning the number of affected rows.
///
/// Zero affected rows means no record with that name is visible to the
/// connection's tenant.
pub async fn rename(
    conn: &TenantConnection,
    current_name: &str,
    new_name: &str,
) -> Result<u64, tokio_postgres::Error> {
    conn.execute(
        "UPDATE customers SET name = $1 WHERE name = $2",
        &[&new_name, &current_name],
    )
    .await
}

/// Deletes a customer record, returning the number of affected rows.
pub async fn delete(conn: &TenantConnection, name: &str) -> Result<u64, tokio_postgres::Error> {
    conn.execute("DELETE FROM customers WHERE name = $1", &[&name])
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serialization() {
        let record = CustomerRecord {
            tenant_id: "acme".to_string(),
            name: "First National".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["tenant_id"], "acme");
        assert_eq!(json["name"], "First National");
    }
}
