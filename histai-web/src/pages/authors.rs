use crate::i18n::t;
use crate::router::Language;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub language: Language,
}

struct Member {
    name: &'static str,
    role_key: &'static str,
    affiliation_key: &'static str,
    profile: &'static str,
}

const MEMBERS: [Member; 4] = [
    Member {
        name: "Mengdi Wang",
        role_key: "authors.role.pi",
        affiliation_key: "authors.affiliation.princeton",
        profile: "https://ece.princeton.edu/people/mengdi-wang",
    },
    Member {
        name: "Jiahao Qiu",
        role_key: "authors.role.lead",
        affiliation_key: "authors.affiliation.princeton",
        profile: "https://ece.princeton.edu/people/jiahao-qiu",
    },
    Member {
        name: "Xi Gao",
        role_key: "authors.role.advisor",
        affiliation_key: "authors.affiliation.fudan",
        profile: "https://history.fudan.edu.cn/info/3261/12541.htm",
    },
    Member {
        name: "Fulian Xiao",
        role_key: "authors.role.member",
        affiliation_key: "authors.affiliation.fudan",
        profile: "https://www.linkedin.com/in/fulian-xiao-a4b2ba371/",
    },
];

#[function_component(AuthorsPage)]
pub fn authors_page(_p: &Props) -> Html {
    html! {
        <div class="page authors-page" data-testid="authors-page">
            <h1>{ t("authors.title") }</h1>
            <p>{ t("authors.intro") }</p>
            <ul class="team-grid">
                { for MEMBERS.iter().map(|m| html! {
                    <li class="team-card">
                        <a href={m.profile} target="_blank" rel="noopener noreferrer">
                            <span class="member-name">{ m.name }</span>
                        </a>
                        <span class="member-role">{ t(m.role_key) }</span>
                        <span class="member-affiliation">{ t(m.affiliation_key) }</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}
