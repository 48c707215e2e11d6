use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

pub(crate) struct BaseClient {
    address: String,
    client: Client,
}

#[derive(Debug)]
pub enum APIError {
    Network,
    MalformedResponse,
    UnexpectedStatusCode(StatusCode),
}
pub type APIResponse<T> = Result<T, APIError>;

impl BaseClient {
    pub fn new(address: String) -> Self {
        // The session token is sent back as a cookie, so it has to be kept
        // between requests
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .unwrap_or_default();
        Self { address, client }
    }

    fn get_client(&self, method: Method, path: String) -> RequestBuilder {
        let url = format!("{}/{}", self.address, path);
        match method {
            Method::GET => self.client.get(&url),
            Method::POST => self.client.post(&url),
            Method::PUT => self.client.put(&url),
            Method::DELETE => self.client.delete(&url),
            _ => unimplemented!(),
        }
    }

    fn check_status_code(
        &self,
        res: &Response,
        expected_status_code: StatusCode,
    ) -> Result<(), APIError> {
        let status = res.status();
        if status != expected_status_code {
            return Err(APIError::UnexpectedStatusCode(status));
        }
        Ok(())
    }

    async fn get_json_response<T: for<'de> Deserialize<'de>>(
        &self,
        res: Response,
    ) -> APIResponse<T> {
        res.json::<T>()
            .await
            .map_err(|_| APIError::MalformedResponse)
    }

    async fn send<T: for<'de> Deserialize<'de>>(
        &self,
        builder: RequestBuilder,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = match builder.send().await {
            Ok(res) => res,
            Err(_) => return Err(APIError::Network),
        };
        self.check_status_code(&res, expected_status_code)?;
        self.get_json_response(res).await
    }

    pub async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(self.get_client(Method::GET, path), expected_status_code)
            .await
    }

    pub async fn get_with_query<T: for<'de> Deserialize<'de>, Q: Serialize>(
        &self,
        path: String,
        query: &Q,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let builder = self.get_client(Method::GET, path).query(query);
        self.send(builder, expected_status_code).await
    }

    pub async fn delete<T: for<'de> Deserialize<'de>>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(self.get_client(Method::DELETE, path), expected_status_code)
            .await
    }

    pub async fn delete_with_query<T: for<'de> Deserialize<'de>, Q: Serialize>(
        &self,
        path: String,
        query: &Q,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let builder = self.get_client(Method::DELETE, path).query(query);
        self.send(builder, expected_status_code).await
    }

    pub async fn put<T: for<'de> Deserialize<'de>, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let builder = self.get_client(Method::PUT, path).json(&body);
        self.send(builder, expected_status_code).await
    }

    pub async fn put_with_query<T: for<'de> Deserialize<'de>, S: Serialize, Q: Serialize>(
        &self,
        body: S,
        path: String,
        query: &Q,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let builder = self.get_client(Method::PUT, path).query(query).json(&body);
        self.send(builder, expected_status_code).await
    }

    pub async fn post<T: for<'de> Deserialize<'de>, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let builder = self.get_client(Method::POST, path).json(&body);
        self.send(builder, expected_status_code).await
    }
}
