use crate::domain::model::SortOrder;
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn resorts_path(&self) -> &str;
    fn data_dir(&self) -> &str;
    fn favorites_file(&self) -> &str;
    fn default_sort(&self) -> SortOrder;
}
