use leptos_api_fetch::StoreAction;

/// Which dialog, if any, is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    TradeDetails(u64),
    Balance,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub symbol: String,
    pub dialog: Option<Dialog>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            symbol: "BTC-USD".to_string(),
            dialog: None,
        }
    }
}

// Selectors.

pub fn symbol(state: &UiState) -> String {
    state.symbol.clone()
}

pub fn open_dialog(state: &UiState) -> Option<Dialog> {
    state.dialog
}

// Actions.

pub struct SelectSymbol(pub String);

impl StoreAction<UiState> for SelectSymbol {
    fn apply(self, state: &mut UiState) {
        state.symbol = self.0;
        state.dialog = None;
    }
}

pub struct OpenDialog(pub Dialog);

impl StoreAction<UiState> for OpenDialog {
    fn apply(self, state: &mut UiState) {
        state.dialog = Some(self.0);
    }
}

pub struct CloseDialog;

impl StoreAction<UiState> for CloseDialog {
    fn apply(self, state: &mut UiState) {
        state.dialog = None;
    }
}
