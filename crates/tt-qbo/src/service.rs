//! The remote data capability the sync gateway is written against.

use std::future::Future;

use tt_core::entities::Company;

use crate::error::QboError;
use crate::model::QboEntity;

/// Query and create access to one QBO company.
pub trait DataService {
    /// Run a QBO query statement and return the matching objects.
    fn execute_query<T: QboEntity>(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<T>, QboError>> + Send;

    /// Create an object and return it as stored by QBO, `Id` included.
    fn add<T: QboEntity>(&self, entity: &T) -> impl Future<Output = Result<T, QboError>> + Send;
}

/// Produces a [`DataService`] bound to a company's realm and credentials.
pub trait DataServiceFactory {
    type Service: DataService;

    /// # Errors
    ///
    /// Returns `QboError::NotConnected` if the company has no realm or token.
    fn data_service(&self, company: &Company) -> Result<Self::Service, QboError>;
}
