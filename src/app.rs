use iced::{
    alignment, Alignment, Application, Color, Command, Element, Length, Theme,
};
use iced::widget::{Button, Column, Container, ProgressBar, Text, TextInput};

use crate::api::fetch_account;
use crate::executor::TokioExecutor;
use crate::lookup::{LookupState, Submission};
use crate::messages::Message;
use crate::render::{self, ResultPanel};

pub struct XrpTrackerApp {
    state: LookupState,
}

impl Application for XrpTrackerApp {
    type Message = Message;
    type Executor = TokioExecutor;
    type Flags = ();
    type Theme = Theme;

    fn new(_flags: ()) -> (Self, Command<Message>) {
        (
            Self {
                state: LookupState::new(),
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        String::from("XRP Unity Tracker")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::AddressChanged(value) => {
                self.state.set_address(value);
                Command::none()
            }
            Message::Track => match self.state.submit() {
                Some(Submission {
                    address,
                    generation,
                }) => Command::perform(
                    async move { fetch_account(&address).await },
                    move |outcome| Message::LookupFinished(generation, outcome),
                ),
                None => Command::none(),
            },
            Message::LookupFinished(generation, outcome) => {
                self.state.finish(generation, outcome);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        let fields = render::project(&self.state);

        let title = Text::new("XRP Unity Tracker")
            .size(32)
            .width(Length::Fill)
            .horizontal_alignment(alignment::Horizontal::Center);

        let subtitle = Text::new("United in One Cause • Freedom Through Decentralization")
            .size(16)
            .style(Color::from_rgb(0.6, 0.5, 0.8))
            .width(Length::Fill)
            .horizontal_alignment(alignment::Horizontal::Center);

        let input = TextInput::new(
            "Enter XRP Address (e.g., rN7n7o...)",
            self.state.address(),
        )
        .on_input(Message::AddressChanged)
        .on_submit(Message::Track)
        .padding(10)
        .size(16);

        let mut track_button = Button::new(Text::new("Track")).padding(10);
        if !fields.busy {
            track_button = track_button.on_press(Message::Track);
        }

        let mut content = Column::new()
            .push(title)
            .push(subtitle)
            .push(input)
            .push(track_button)
            .spacing(15)
            .padding(20)
            .width(Length::Fill)
            .align_items(Alignment::Center);

        if fields.busy {
            content = content.push(
                Column::new()
                    .push(Text::new("Looking up address..."))
                    .push(ProgressBar::new(0.0..=100.0, 50.0).width(Length::Fixed(300.0)))
                    .spacing(10)
                    .padding(10),
            );
        }

        if let Some(error) = &fields.error {
            content = content.push(
                Text::new(error.clone())
                    .size(14)
                    .style(Color::from_rgb(0.8, 0.0, 0.0))
                    .width(Length::Fill)
                    .horizontal_alignment(alignment::Horizontal::Center),
            );
        }

        if let Some(panel) = &fields.result {
            content = content.push(result_card(panel));
        }

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .padding(10)
            .into()
    }
}

fn result_card(panel: &ResultPanel) -> Column<'static, Message> {
    Column::new()
        .push(Text::new("XRP Balance").size(14).style(Color::from_rgb(0.5, 0.4, 0.7)))
        .push(Text::new(format!("{} XRP", panel.balance)).size(28))
        .push(Text::new("Account Status").size(14).style(Color::from_rgb(0.5, 0.4, 0.7)))
        .push(Text::new(panel.account_name.clone()).size(20))
        .push(Text::new(format!("Sequence: {}", panel.sequence)).size(14))
        .push(Text::new("Address").size(14).style(Color::from_rgb(0.5, 0.4, 0.7)))
        .push(Text::new(panel.address.clone()).size(14))
        .push(
            Text::new("\"Together we stand for financial freedom and decentralization\"")
                .size(14)
                .style(Color::from_rgb(0.6, 0.5, 0.8)),
        )
        .spacing(8)
        .padding(15)
        .align_items(Alignment::Center)
}
