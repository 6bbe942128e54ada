use crate::board::BoardView;
use crate::http::{FetchError, JServiceSource};
use crate::utils::js_random_seed;
use clap::Args;
use gloo::timers::callback::Timeout;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::fmt::Display;
use trivia_core::{Board, CellPos, SetupError};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Phase {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Game state of the page, independent of any rendering.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Session {
    board: Option<Board>,
    phase: Phase,
    generation: u64,
    started: bool,
}

impl Session {
    pub(crate) const START_LABEL: &'static str = "Start";
    pub(crate) const RESTART_LABEL: &'static str = "Restart";

    pub(crate) fn new() -> Self {
        Self {
            board: None,
            phase: Phase::Idle,
            generation: 0,
            started: false,
        }
    }

    pub(crate) fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub(crate) fn phase(&self) -> &Phase {
        &self.phase
    }

    pub(crate) fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub(crate) fn button_label(&self) -> &'static str {
        if self.started {
            Self::RESTART_LABEL
        } else {
            Self::START_LABEL
        }
    }

    pub(crate) fn button_class(&self) -> Option<&'static str> {
        self.started.then_some("restart")
    }

    /// Clears the board and enters loading, returning the generation to finish.
    pub(crate) fn begin(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.board = None;
        self.phase = Phase::Loading;
        self.generation
    }

    /// Applies a setup result; results of a superseded `begin` are dropped.
    pub(crate) fn finish<E: Display>(&mut self, generation: u64, result: Result<Board, E>) -> bool {
        if generation != self.generation || !self.is_loading() {
            log::debug!(
                "dropping setup result of generation {}, current is {}",
                generation,
                self.generation
            );
            return false;
        }

        self.started = true;
        match result {
            Ok(board) => {
                self.board = Some(board);
                self.phase = Phase::Ready;
            }
            Err(err) => {
                log::error!("could not set up game: {}", err);
                self.phase = Phase::Failed(err.to_string());
            }
        }
        true
    }

    pub(crate) fn reveal(&mut self, pos: CellPos) -> bool {
        let Some(board) = self.board.as_mut() else {
            return false;
        };
        match board.reveal(pos) {
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::warn!("reveal {:?}: {}", pos, err);
                false
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub enum Msg {
    Start,
    BeginSetup(u64),
    Loaded(u64, Result<Board, SetupError<FetchError>>),
    Reveal(CellPos),
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Base URL of the trivia API
    #[arg(long, default_value = JServiceSource::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Milliseconds the loading indicator shows before the board is fetched
    #[arg(long, default_value_t = GameProps::DEFAULT_LOADING_DELAY)]
    pub loading_delay: u32,
}

impl GameProps {
    pub const DEFAULT_LOADING_DELAY: u32 = 2000;
}

impl Default for GameProps {
    fn default() -> Self {
        Self {
            seed: None,
            endpoint: JServiceSource::DEFAULT_ENDPOINT.to_string(),
            loading_delay: Self::DEFAULT_LOADING_DELAY,
        }
    }
}

pub struct GameView {
    session: Session,
    source: JServiceSource,
    _loading_timer: Option<Timeout>,
}

impl GameView {
    fn create_loading_timer(ctx: &Context<Self>, generation: u64) -> Timeout {
        let link = ctx.link().clone();
        Timeout::new(ctx.props().loading_delay, move || {
            link.send_message(Msg::BeginSetup(generation))
        })
    }

    fn spawn_setup(&self, ctx: &Context<Self>, generation: u64) {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        let source = self.source.clone();
        log::debug!("setting up game {} (seed: {})", generation, seed);

        ctx.link().send_future(async move {
            let mut rng = SmallRng::seed_from_u64(seed);
            let result = trivia_core::setup_game(&source, &mut rng).await;
            Msg::Loaded(generation, result)
        });
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            session: Session::new(),
            source: JServiceSource::new(ctx.props().endpoint.clone()),
            _loading_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => {
                let generation = self.session.begin();
                log::debug!("start game {}", generation);
                self._loading_timer = Some(GameView::create_loading_timer(ctx, generation));
                true
            }
            BeginSetup(generation) => {
                self._loading_timer = None;
                self.spawn_setup(ctx, generation);
                false
            }
            Loaded(generation, result) => self.session.finish(generation, result),
            Reveal(pos) => {
                log::debug!("reveal cell: {:?}", pos);
                self.session.reveal(pos)
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.source = JServiceSource::new(ctx.props().endpoint.clone());
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let label = self.session.button_label();
        let button_class = classes!(self.session.button_class());
        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Start
        });
        let cb_reveal = ctx.link().callback(Msg::Reveal);
        let board = self.session.board().cloned();

        html! {
            <div class="trivia">
                <nav>
                    <button id="start" class={button_class} onclick={cb_start}>{label}</button>
                </nav>
                if self.session.is_loading() {
                    <div class="loading" aria-busy="true">{"Loading…"}</div>
                }
                if let Phase::Failed(message) = self.session.phase() {
                    <p class="error" role="alert">{message.clone()}</p>
                }
                <BoardView {board} callback={cb_reveal}/>
            </div>
        }
    }
}
