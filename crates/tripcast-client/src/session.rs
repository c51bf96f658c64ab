use crate::client::PredictClient;
use tripcast_core::{GeoPoint, MapSelection, Pick, Result, ResultsBoard, TripForm, Variant};

/// One page's worth of state: the service client, the map selection and the
/// two output areas. Each `submit_*`/`fetch_*` call makes at most one request
/// and returns the alert text when validation stopped it.
#[derive(Debug)]
pub struct Session {
    client: PredictClient,
    selection: MapSelection,
    board: ResultsBoard,
}

impl Session {
    pub fn new(client: PredictClient) -> Self {
        Self {
            client,
            selection: MapSelection::new(),
            board: ResultsBoard::new(),
        }
    }

    pub fn variant(&self) -> Variant {
        self.client.variant()
    }

    pub fn client(&self) -> &PredictClient {
        &self.client
    }

    pub fn selection(&self) -> &MapSelection {
        &self.selection
    }

    pub fn board(&self) -> &ResultsBoard {
        &self.board
    }

    pub fn click(&mut self, point: GeoPoint) -> Result<Pick> {
        let pick = self.selection.click(point);
        match &pick {
            Ok(p) => tracing::info!("{} set to {}", p.label(), p.point()),
            Err(e) => tracing::warn!("Click at {} ignored: {}", point, e),
        }
        pick
    }

    pub async fn submit_form(&mut self, form: TripForm) -> Option<String> {
        let outcome = self.client.predict_form(form).await;
        self.board.show_prediction(self.variant(), &outcome)
    }

    pub async fn submit_selection(&mut self) -> Option<String> {
        let outcome = self.client.predict_selection(&self.selection).await;
        self.board.show_prediction(self.variant(), &outcome)
    }

    pub async fn fetch_results(&mut self) -> Option<String> {
        let outcome = self.client.results().await;
        self.board.show_evaluation(self.variant(), &outcome)
    }
}
