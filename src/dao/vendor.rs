use super::SqlDao;
use crate::error::SqlDaoError;
use crate::vendor::Vendor;

impl SqlDao {
    /// Ask the server which product it is.
    ///
    /// # Errors
    /// Returns whatever the executor reports for the version probe.
    pub async fn vendor(&self) -> Result<Vendor, SqlDaoError> {
        let product = self.executor.product_name().await?;
        Ok(Vendor::from_product_name(&product))
    }

    pub async fn is_oracle(&self) -> bool {
        self.vendor_is(|v| matches!(v, Vendor::Oracle)).await
    }

    pub async fn is_mysql(&self) -> bool {
        self.vendor_is(|v| matches!(v, Vendor::MySql)).await
    }

    pub async fn is_mssql(&self) -> bool {
        self.vendor_is(|v| matches!(v, Vendor::MsSql)).await
    }

    async fn vendor_is(&self, check: impl FnOnce(&Vendor) -> bool) -> bool {
        match self.vendor().await {
            Ok(vendor) => check(&vendor),
            Err(e) => {
                tracing::error!(error = %e, "could not determine database vendor");
                false
            }
        }
    }
}
