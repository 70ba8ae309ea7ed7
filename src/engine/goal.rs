use serde_json::Map;

use crate::engine::client::MegaverseClient;
use crate::engine::transport::Transport;
use crate::error::{ApiResult, RemoteApiError};
use crate::model::goal_map::GoalMap;

pub struct GoalMapApi<'a, T> {
    client: &'a MegaverseClient<T>,
}

impl<T: Transport> MegaverseClient<T> {
    pub fn goal_map(&self) -> GoalMapApi<'_, T> {
        GoalMapApi { client: self }
    }
}

impl<T: Transport> GoalMapApi<'_, T> {
    pub fn get_goal(&self) -> ApiResult<GoalMap> {
        let path = format!("/map/{}/goal", self.client.candidate_id());
        let body = self.client.get(&path, Map::new())?;

        if body.get("goal").is_none() {
            return Err(RemoteApiError::MalformedGoal(
                "response has no 'goal' field".into(),
            ));
        }

        serde_json::from_value(body).map_err(|e| RemoteApiError::MalformedGoal(e.to_string()))
    }
}
