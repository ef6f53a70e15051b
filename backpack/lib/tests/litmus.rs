use github_issues_lib::config::Config;
use github_issues_lib::error::StepError;
use github_issues_lib::github::GitHubClient;
use github_issues_lib::steps::Session;

const USER: &str = "octocat";

#[derive(::core::default::Default)]
struct World {
    server: Option<::mockito::ServerGuard>,
    mocks: Vec<::mockito::Mock>,
    session: Option<Session<GitHubClient>>,
    fetched: Option<Result<(), StepError>>,
}

impl World {
    /// Serves `GET /repos/octocat/{repo}/issues` with `count` issues and `status`.
    fn serve(&mut self, repo: &str, status: usize, count: u64) {
        let server = self.server.get_or_insert_with(::mockito::Server::new);
        let body = (1..=count)
            .map(|n| format!(r#"{{ "number": {n}, "title": "Issue {n}" }}"#))
            .collect::<Vec<_>>()
            .join(",");
        let mock = server
            .mock("GET", format!("/repos/{USER}/{repo}/issues").as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(format!("[{body}]"))
            .create();
        self.mocks.push(mock);
    }

    fn anonymous(&mut self) {
        let Some(server) = self.server.as_ref() else {
            return;
        };
        let session = Config::default()
            .with_api_base(&server.url())
            .ok()
            .and_then(|config| GitHubClient::new(&config).ok())
            .map(Session::new);
        if let Some(session) = &session {
            session.mark_anonymous();
        }
        self.session = session;
    }

    fn fetch(&mut self, repo: &str) {
        if let Some(session) = self.session.as_mut() {
            self.fetched = Some(session.fetch_issues(USER, repo));
        }
    }

    fn check(&self, minimum: usize) -> Option<Result<(), StepError>> {
        self.session
            .as_ref()
            .map(|session| session.assert_minimum_count(minimum))
    }

    fn count(&self) -> Option<usize> {
        self.session.as_ref().and_then(Session::result_count)
    }
}

fn main() -> std::process::ExitCode {
    ::litmus::Runner::new()
        .feature(
            ::litmus::Feature::new()
                .description("Listing repository issues")
                .scenario(
                    ::litmus::Scenario::<World>::new()
                        .description("Get a list of issues for a repository")
                        .given("I am an anonymous user", |w| {
                            w.serve("hello-world", 200, 3);
                            w.anonymous();
                        })
                        .when(
                            r#"I request a list of issues from user "octocat" for the repository "hello-world""#,
                            |w| w.fetch("hello-world"),
                        )
                        .then("I should get at least 1 result", |w| {
                            ::litmus::assert!(
                                matches!(w.check(1), Some(Ok(()))) && w.count() == Some(3),
                                "3 issues satisfy a minimum of 1"
                            )
                        }),
                )
                .scenario(
                    ::litmus::Scenario::<World>::new()
                        .description("Ask for more issues than the repository has")
                        .given("I am an anonymous user", |w| {
                            w.serve("hello-world", 200, 3);
                            w.anonymous();
                        })
                        .when(
                            r#"I request a list of issues from user "octocat" for the repository "hello-world""#,
                            |w| w.fetch("hello-world"),
                        )
                        .then("I should get at least 4 result", |w| {
                            ::litmus::assert!(
                                matches!(
                                    w.check(4),
                                    Some(Err(StepError::InsufficientResults {
                                        expected: 4,
                                        actual: 3
                                    }))
                                ),
                                "3 issues fall short of 4"
                            )
                        }),
                )
                .scenario(
                    ::litmus::Scenario::<World>::new()
                        .description("An empty repository satisfies a zero minimum")
                        .given("I am an anonymous user", |w| {
                            w.serve("empty", 200, 0);
                            w.anonymous();
                        })
                        .when(
                            r#"I request a list of issues from user "octocat" for the repository "empty""#,
                            |w| w.fetch("empty"),
                        )
                        .then("I should get at least 0 result", |w| {
                            ::litmus::assert!(matches!(w.check(0), Some(Ok(()))), "zero minimum")
                        }),
                )
                .scenario(
                    ::litmus::Scenario::<World>::new()
                        .description("Request issues for a repository that does not exist")
                        .given("I am an anonymous user", |w| {
                            w.serve("missing", 404, 0);
                            w.anonymous();
                        })
                        .when(
                            r#"I request a list of issues from user "octocat" for the repository "missing""#,
                            |w| w.fetch("missing"),
                        )
                        .then("the request fails with a 404 status code", |w| {
                            ::litmus::assert!(
                                matches!(
                                    w.fetched,
                                    Some(Err(StepError::UnexpectedStatus { code: 404 }))
                                ) && w.count().is_none(),
                                "404 is not a 200"
                            )
                        }),
                ),
        )
        .run()
}
