use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    config::BookkeepingConfig,
    domain::usecases::distribution_usecase::{DistributionUsecase as _, DistributionUsecaseImpl},
    entities::DistributionReport,
    presentation::report_printer::DistributionReportPrinter,
    repositories::{LedgerCsv, LedgerCsvFiles, LedgerRepository, LedgerRepositoryImpl},
};

/// Plain-text rendering of a [`DistributionReport`].
pub type RenderedReport = String;

pub struct BookkeepingUtil {
    config: BookkeepingConfig,
    printer: DistributionReportPrinter,
}

impl BookkeepingUtil {
    pub fn new(config: BookkeepingConfig) -> Self {
        Self {
            printer: DistributionReportPrinter::new(config.currency, config.note_width),
            config,
        }
    }

    pub async fn from_string(
        &self,
        csv: LedgerCsv<'_>,
    ) -> Result<(DistributionReport, RenderedReport), ServerError> {
        self.from_repository(LedgerRepositoryImpl::from_string(csv)?)
            .await
    }

    pub async fn from_file<P>(
        &self,
        files: LedgerCsvFiles<P>,
    ) -> Result<(DistributionReport, RenderedReport), ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.from_repository(LedgerRepositoryImpl::from_file(files).await?)
            .await
    }

    /// Computes the report from any store implementing [`LedgerRepository`].
    pub async fn from_repository<R>(
        &self,
        repository: R,
    ) -> Result<(DistributionReport, RenderedReport), ServerError>
    where
        R: LedgerRepository,
    {
        let report = DistributionUsecaseImpl::new(repository)
            .compute(self.config.months)
            .await?;
        let rendered = self.printer.print_report(&report);
        info!(
            currency = self.config.currency.code(),
            notes = report.notes.len(),
            "rendered distribution report"
        );
        Ok((report, rendered))
    }
}
