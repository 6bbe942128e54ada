use trivia_core::{Board, CATEGORY_COUNT, CLUES_PER_CATEGORY, CellPos, Clue, Showing};
use yew::prelude::*;

/// Shown in a cell until its question is revealed.
pub(crate) const PLACEHOLDER: &str = "?";

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ViewCell {
    Hidden,
    Question(String),
    Answer(String),
}

impl ViewCell {
    pub(crate) fn text(&self) -> &str {
        match self {
            Self::Hidden => PLACEHOLDER,
            Self::Question(text) | Self::Answer(text) => text,
        }
    }
}

pub(crate) fn cell_view(clue: &Clue) -> ViewCell {
    match clue.showing() {
        Showing::Hidden => ViewCell::Hidden,
        Showing::Question => ViewCell::Question(clue.question.clone()),
        Showing::Answer => ViewCell::Answer(clue.answer.clone()),
    }
}

pub(crate) fn header_titles(board: &Board) -> Vec<String> {
    board.titles().map(str::to_owned).collect()
}

/// Body rows, one per clue index, each holding one cell per category.
pub(crate) fn body_rows(board: &Board) -> Vec<Vec<ViewCell>> {
    (0..CLUES_PER_CATEGORY)
        .map(|clue| {
            (0..CATEGORY_COUNT)
                .map(|category| cell_view(&board[(category, clue)]))
                .collect()
        })
        .collect()
}

pub(crate) fn cell_classes(cell: &ViewCell) -> Classes {
    classes!(
        "cell",
        match cell {
            ViewCell::Hidden => classes!("hidden"),
            ViewCell::Question(_) => classes!("question"),
            ViewCell::Answer(_) => classes!("answer", "answered"),
        }
    )
}

pub(crate) fn cell_id((category, clue): CellPos) -> String {
    format!("{}-{}", category, clue)
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    pos: CellPos,
    cell: ViewCell,
    callback: Callback<CellPos>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        pos,
        cell,
        callback,
    } = props.clone();

    let class = cell_classes(&cell);

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("{:?} clicked", pos);
        callback.emit(pos);
    });

    html! {
        <td id={cell_id(pos)} {class} {onclick}>{cell.text()}</td>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct BoardProps {
    pub board: Option<Board>,
    pub callback: Callback<CellPos>,
}

/// Header row of category titles over the clue grid, empty without a board.
#[function_component(BoardView)]
pub(crate) fn board_component(props: &BoardProps) -> Html {
    let Some(board) = &props.board else {
        return html! {
            <table class="board">
                <thead/>
                <tbody/>
            </table>
        };
    };

    html! {
        <table class="board">
            <thead>
                <tr>
                    { for header_titles(board).into_iter().map(|title| html! { <th>{title}</th> }) }
                </tr>
            </thead>
            <tbody>
                {
                    for body_rows(board).into_iter().enumerate().map(|(clue, row)| html! {
                        <tr>
                            {
                                for row.into_iter().enumerate().map(|(category, cell)| {
                                    let pos = (category, clue);
                                    let callback = props.callback.clone();
                                    html! { <CellView {pos} {cell} {callback}/> }
                                })
                            }
                        </tr>
                    })
                }
            </tbody>
        </table>
    }
}
