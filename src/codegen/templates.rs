//! Go source templates for the generated command.
//!
//! Substitution points are written `{{.Package}}` and `{{.Function}}`.

/// Protocol-independent entrypoint.
pub const PACKAGE_MAIN: &str = r#"
package main

import (
	"context"
	"log"
	"os"
	"os/signal"
	"syscall"
	"time"

	fn "{{.Package}}"
)

// shutdownGrace is how long the receiver keeps serving after SIGTERM so the
// container runtime can steer traffic away before connections are closed.
const shutdownGrace = 30 * time.Second

func main() {
	// SIGTERM cancels ctx, which fails readiness probes. After the grace
	// period, drainCtx is cancelled and the receiver drains and exits.
	sigs := make(chan os.Signal, 1)
	signal.Notify(sigs, syscall.SIGTERM)
	ctx, cancel := context.WithCancel(context.Background())
	drainCtx, cancelDrain := context.WithCancel(context.Background())
	go func() {
		<-sigs
		cancel()
		time.Sleep(shutdownGrace)
		cancelDrain()
	}()

	client, err := newClient(ctx)
	if err != nil {
		log.Fatal(err.Error())
	}

	if err := client.StartReceiver(drainCtx, fn.{{.Function}}); err != nil {
		log.Fatal(err)
	}
}
"#;

/// HTTP adapter, compiled in with `-tags=http`.
pub const PROTOCOL_HTTP: &str = r#"
//go:build http
// +build http

package main

import (
	"context"
	"net/http"
	"strings"

	cloudevents "github.com/cloudevents/sdk-go/v2"
	ceclient "github.com/cloudevents/sdk-go/v2/client"
	cehttp "github.com/cloudevents/sdk-go/v2/protocol/http"
)

// probe answers kubelet probes on behalf of the user function.
func probe(ctx context.Context) http.HandlerFunc {
	return func(w http.ResponseWriter, r *http.Request) {
		if !strings.HasPrefix(r.Header.Get("User-Agent"), "kube-probe/") {
			http.Error(w, "method not allowed", http.StatusMethodNotAllowed)
			return
		}
		select {
		case <-ctx.Done():
			// Shutting down: fail readiness so traffic drains elsewhere.
			http.Error(w, "shutting down", http.StatusServiceUnavailable)
		default:
			w.WriteHeader(http.StatusOK)
		}
	}
}

func newClient(ctx context.Context) (cloudevents.Client, error) {
	p, err := cehttp.New(cehttp.WithGetHandlerFunc(probe(ctx)))
	if err != nil {
		return nil, err
	}
	return ceclient.NewObserved(p, ceclient.WithTimeNow(), ceclient.WithUUIDs())
}
"#;
