use crate::i18n::t;
use copa_core::display::format_ordinal;
use copa_core::model::StandingRow;
use copa_core::standings::{GoalDifferenceTone, PositionMarker, format_goal_difference};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StandingsTableProps {
    pub rows: Rc<Vec<StandingRow>>,
}

const fn tone_class(tone: GoalDifferenceTone) -> &'static str {
    match tone {
        GoalDifferenceTone::Positive => "text-success",
        GoalDifferenceTone::Negative => "text-error",
    }
}

fn position_label(marker: PositionMarker) -> String {
    match marker {
        PositionMarker::Trophy => "🏆".to_string(),
        PositionMarker::SilverMedal => "🥈".to_string(),
        PositionMarker::BronzeMedal => "🥉".to_string(),
        PositionMarker::Numeral(n) => format_ordinal(n),
    }
}

#[function_component(StandingsTable)]
pub fn standings_table(props: &StandingsTableProps) -> Html {
    let headers = [
        "standings.position",
        "standings.team",
        "standings.played",
        "standings.wins",
        "standings.draws",
        "standings.losses",
        "standings.goals_for",
        "standings.goals_against",
        "standings.goal_difference",
        "standings.points",
    ];
    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra standings-table">
                <thead>
                    <tr>{ for headers.iter().map(|key| html! { <th scope="col">{ t(key) }</th> }) }</tr>
                </thead>
                <tbody>
                    { for props.rows.iter().map(|row| {
                        let marker = PositionMarker::for_position(row.position);
                        html! {
                            <tr class={classes!(marker.row_class())}>
                                <td aria-label={format_ordinal(row.position)}>{ position_label(marker) }</td>
                                <td>
                                    <span class="font-bold">{ &row.team.name }</span>
                                    <span class="block text-xs opacity-70">{ &row.team.school }</span>
                                </td>
                                <td>{ row.played }</td>
                                <td>{ row.wins }</td>
                                <td>{ row.draws }</td>
                                <td>{ row.losses }</td>
                                <td>{ row.goals_for }</td>
                                <td>{ row.goals_against }</td>
                                <td class={tone_class(GoalDifferenceTone::of(row.goal_difference))}>
                                    { format_goal_difference(row.goal_difference) }
                                </td>
                                <td class="font-bold">{ row.points }</td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}
