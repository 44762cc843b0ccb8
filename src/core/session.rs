use crate::core::aggregate::AppointmentSearch;
use crate::domain::model::{ResultSet, SearchCriteria, SortKey};
use crate::domain::ports::RegistryClient;
use crate::utils::error::{FinderError, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// 搜尋代次標記。session 開始新搜尋時，舊標記即視為已取消。
#[derive(Debug, Clone)]
pub struct SearchToken {
    current: Arc<AtomicU64>,
    generation: u64,
}

impl SearchToken {
    /// 不屬於任何 session 的標記，除非自行 cancel 否則永遠有效
    pub fn detached() -> Self {
        Self {
            current: Arc::new(AtomicU64::new(0)),
            generation: 0,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.current.load(Ordering::SeqCst) != self.generation
    }

    pub fn cancel(&self) {
        let _ = self.current.compare_exchange(
            self.generation,
            self.generation + 1,
            Ordering::SeqCst,
            Ordering::SeqCst,
        );
    }
}

/// 給呈現層的狀態快照
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub results: ResultSet,
    pub is_loading: bool,
    pub error: Option<String>,
    pub sort_key: SortKey,
}

/// 持有目前的結果集與載入/錯誤狀態；同一時間只有最新的搜尋有效
pub struct SearchSession<C: RegistryClient> {
    engine: AppointmentSearch<C>,
    generation: Arc<AtomicU64>,
    state: Mutex<SessionState>,
}

struct SessionState {
    snapshot: SessionSnapshot,
    // 目前擁有 is_loading/error 的搜尋代次
    active: u64,
}

impl<C: RegistryClient> SearchSession<C> {
    pub fn new(engine: AppointmentSearch<C>) -> Self {
        Self {
            engine,
            generation: Arc::new(AtomicU64::new(0)),
            state: Mutex::new(SessionState {
                snapshot: SessionSnapshot::default(),
                active: 0,
            }),
        }
    }

    pub fn with_sort_key(self, sort_key: SortKey) -> Self {
        // 建構階段尚無其他持有者
        let mut state = self.state.into_inner();
        state.snapshot.sort_key = sort_key;
        state.snapshot.results.sort_key = sort_key;
        Self {
            engine: self.engine,
            generation: self.generation,
            state: Mutex::new(state),
        }
    }

    /// 必須在持有 state 鎖時呼叫，代次順序才會與狀態寫入順序一致
    fn begin(&self, state: &mut SessionState) -> SearchToken {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        state.active = generation;
        state.snapshot.is_loading = true;
        state.snapshot.error = None;
        SearchToken {
            current: Arc::clone(&self.generation),
            generation,
        }
    }

    /// 執行新搜尋並取代先前的搜尋。成功時整批替換結果集；
    /// 失敗時記錄錯誤訊息，保留先前的結果集。
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<ResultSet> {
        let token = {
            let mut state = self.state.lock().await;
            self.begin(&mut state)
        };

        let outcome = self.engine.search_with_token(criteria, &token).await;

        let mut state = self.state.lock().await;
        if token.is_cancelled() {
            tracing::debug!("Discarding result of superseded search for '{}'", criteria.specialty);
            // 沒有較新的搜尋接手時才結束載入狀態
            if state.active == token.generation {
                state.snapshot.is_loading = false;
            }
            return Err(FinderError::Superseded);
        }
        state.snapshot.is_loading = false;

        match outcome {
            Ok(mut results) => {
                results.resort(state.snapshot.sort_key);
                state.snapshot.results = results.clone();
                Ok(results)
            }
            Err(e) => {
                state.snapshot.error = Some(e.user_friendly_message());
                Err(e)
            }
        }
    }

    /// 不重新查詢，只改變排序
    pub async fn resort(&self, sort_key: SortKey) -> ResultSet {
        let mut state = self.state.lock().await;
        state.snapshot.sort_key = sort_key;
        state.snapshot.results.resort(sort_key);
        state.snapshot.results.clone()
    }

    /// 取消進行中的搜尋
    pub async fn cancel(&self) {
        let mut state = self.state.lock().await;
        state.active = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        state.snapshot.is_loading = false;
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.state.lock().await.snapshot.clone()
    }
}
