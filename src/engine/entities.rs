use serde_json::{Map, Value};

use crate::engine::client::MegaverseClient;
use crate::engine::transport::Transport;
use crate::error::ApiResult;
use crate::model::marker::{ComethDirection, SoloonColor};

fn cell(row: u32, column: u32) -> Map<String, Value> {
    let mut data = Map::new();
    data.insert("row".into(), row.into());
    data.insert("column".into(), column.into());
    data
}

pub struct PolyanetsApi<'a, T> {
    client: &'a MegaverseClient<T>,
}

pub struct SoloonsApi<'a, T> {
    client: &'a MegaverseClient<T>,
}

pub struct ComethsApi<'a, T> {
    client: &'a MegaverseClient<T>,
}

impl<T: Transport> MegaverseClient<T> {
    pub fn polyanets(&self) -> PolyanetsApi<'_, T> {
        PolyanetsApi { client: self }
    }

    pub fn soloons(&self) -> SoloonsApi<'_, T> {
        SoloonsApi { client: self }
    }

    pub fn comeths(&self) -> ComethsApi<'_, T> {
        ComethsApi { client: self }
    }
}

impl<T: Transport> PolyanetsApi<'_, T> {
    const PATH: &'static str = "/polyanets";

    pub fn create(&self, row: u32, column: u32) -> ApiResult<Value> {
        self.client.post(Self::PATH, cell(row, column))
    }

    pub fn delete(&self, row: u32, column: u32) -> ApiResult<Value> {
        self.client.delete(Self::PATH, cell(row, column))
    }
}

impl<T: Transport> SoloonsApi<'_, T> {
    const PATH: &'static str = "/soloons";

    pub fn create(&self, row: u32, column: u32, color: SoloonColor) -> ApiResult<Value> {
        let mut data = cell(row, column);
        data.insert("color".into(), color.as_str().into());
        self.client.post(Self::PATH, data)
    }

    pub fn delete(&self, row: u32, column: u32) -> ApiResult<Value> {
        self.client.delete(Self::PATH, cell(row, column))
    }
}

impl<T: Transport> ComethsApi<'_, T> {
    const PATH: &'static str = "/comeths";

    pub fn create(&self, row: u32, column: u32, direction: ComethDirection) -> ApiResult<Value> {
        let mut data = cell(row, column);
        data.insert("direction".into(), direction.as_str().into());
        self.client.post(Self::PATH, data)
    }

    pub fn delete(&self, row: u32, column: u32) -> ApiResult<Value> {
        self.client.delete(Self::PATH, cell(row, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::{requests, FakeTransport};
    use crate::engine::transport::Method;
    use serde_json::json;

    fn client() -> (MegaverseClient<FakeTransport>, crate::engine::testing::EventLog) {
        let fake = FakeTransport::new();
        let log = fake.log();
        (MegaverseClient::new(fake, "https://example.test/api", "cand-1"), log)
    }

    #[test]
    fn create_bodies_carry_exact_fields() {
        let (client, log) = client();

        client.polyanets().create(3, 4).unwrap();
        client.soloons().create(0, 9, SoloonColor::Purple).unwrap();
        client.comeths().create(12, 1, ComethDirection::Up).unwrap();

        let sent = requests(&log);
        let bodies: Vec<_> = sent.iter().map(|r| Value::Object(r.payload.clone())).collect();
        assert_eq!(
            bodies,
            vec![
                json!({"row": 3, "column": 4, "candidateId": "cand-1"}),
                json!({"row": 0, "column": 9, "color": "purple", "candidateId": "cand-1"}),
                json!({"row": 12, "column": 1, "direction": "up", "candidateId": "cand-1"}),
            ]
        );
        assert!(sent.iter().all(|r| r.method == Method::Post));
        assert_eq!(sent[0].url, "https://example.test/api/polyanets");
        assert_eq!(sent[1].url, "https://example.test/api/soloons");
        assert_eq!(sent[2].url, "https://example.test/api/comeths");
    }

    #[test]
    fn deletes_omit_marker_fields() {
        let (client, log) = client();

        client.polyanets().delete(1, 2).unwrap();
        client.soloons().delete(1, 2).unwrap();
        client.comeths().delete(1, 2).unwrap();

        for request in requests(&log) {
            assert_eq!(request.method, Method::Delete);
            assert_eq!(
                Value::Object(request.payload),
                json!({"row": 1, "column": 2, "candidateId": "cand-1"})
            );
        }
    }
}
